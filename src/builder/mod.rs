//! Builder API for ergonomic guard and notification construction.
//!
//! This module provides fluent builders and the `cond!` macro for writing
//! guard chains with minimal boilerplate.

pub mod error;
pub mod guard;
pub mod macros;
pub mod notification;

pub use error::BuildError;
pub use guard::GuardBuilder;
pub use notification::NotificationBuilder;

use crate::core::{when, Guard, Outcome};

/// Create a guard that fails with `message` when `predicate` holds.
///
/// # Example
///
/// ```
/// use sms_notify::builder::reject_if;
/// use sms_notify::core::{otherwise, select, Outcome};
///
/// let number = "";
/// let outcome = select(
///     &otherwise(|| Outcome::success(number)),
///     &[reject_if(|| number.is_empty(), "the phone number can not be empty")],
/// );
///
/// assert!(outcome.is_failure());
/// ```
pub fn reject_if<'a, T, P>(predicate: P, message: impl Into<String>) -> Guard<'a, T>
where
    T: 'a,
    P: Fn() -> bool + 'a,
{
    let message = message.into();
    when(predicate, move || Outcome::failure(message.clone()))
}
