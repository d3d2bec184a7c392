//! sms-notify: guarded cond-style evaluation for SMS notifications
//!
//! The crate follows a "pure core, imperative shell" split. The core
//! evaluates an ordered chain of lazy guards into an [`Outcome`] without any
//! side effects; the shell resolves that outcome into exactly one effect,
//! either sending a message or logging why it was not sent.
//!
//! # Core Concepts
//!
//! - **Outcome**: `Success(value)` or `Failure(message)`, consumed with
//!   [`Outcome::resolve`] which runs exactly one of two continuations
//! - **Guards**: lazy predicate/branch pairs, terminated by a default guard
//! - **select**: first-match-wins, short-circuit evaluation of a guard chain
//! - **Notification**: phone-number validation wired to send/log capabilities
//!
//! # Example
//!
//! ```rust
//! use sms_notify::core::{otherwise, select, when, Outcome};
//!
//! let number: Option<&str> = None;
//!
//! let outcome = select(
//!     &otherwise(|| Outcome::success(number.unwrap_or_default())),
//!     &[
//!         when(|| number.is_none(), || Outcome::failure("the phone number can not be null")),
//!         when(|| number == Some(""), || Outcome::failure("the phone number can not be empty")),
//!     ],
//! );
//!
//! let line = outcome.resolve(
//!     |number| format!("sending to {number}"),
//!     |reason| format!("rejected: {reason}"),
//! );
//! assert_eq!(line, "rejected: the phone number can not be null");
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{BuildError, NotificationBuilder};
pub use crate::core::{otherwise, select, when, DefaultGuard, Guard, Outcome};
pub use crate::effects::{Dispatch, Notification};
