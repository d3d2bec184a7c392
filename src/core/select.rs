//! First-match-wins evaluation of a guard chain.

use super::guard::{DefaultGuard, Guard};
use super::outcome::Outcome;
use tracing::trace;

/// Evaluate `guards` in order and return the branch of the first match.
///
/// Predicates are checked strictly in the order given. As soon as one is
/// true its branch is evaluated and returned; no later predicate and no
/// other branch is touched. When nothing matches, the branch of `default`
/// is returned. An empty `guards` slice always yields the default branch.
///
/// # Example
///
/// ```rust
/// use sms_notify::core::{otherwise, select, when, Outcome};
///
/// let number: Option<&str> = Some("");
///
/// let outcome = select(
///     &otherwise(|| Outcome::success(number.unwrap_or_default())),
///     &[
///         when(|| number.is_none(), || Outcome::failure("the phone number can not be null")),
///         when(|| number == Some(""), || Outcome::failure("the phone number can not be empty")),
///     ],
/// );
///
/// assert_eq!(outcome, Outcome::failure("the phone number can not be empty"));
/// ```
pub fn select<T>(default: &DefaultGuard<'_, T>, guards: &[Guard<'_, T>]) -> Outcome<T> {
    match guards.iter().position(|guard| guard.check()) {
        Some(index) => {
            trace!(index, "guard matched");
            guards[index].fire()
        }
        None => {
            trace!(guards = guards.len(), "no guard matched, taking default branch");
            default.fire()
        }
    }
}
