//! Macros for ergonomic guard chains.

/// Evaluate a cond-style guard chain.
///
/// Each `if` arm becomes a guard, in the order written; the mandatory
/// `else` arm becomes the default guard. The chain is evaluated with
/// [`select`](crate::core::select), so it short-circuits on the first
/// predicate that holds.
///
/// # Example
///
/// ```
/// use sms_notify::cond;
/// use sms_notify::core::Outcome;
///
/// let number: Option<&str> = None;
///
/// let outcome = cond! {
///     if number.is_none() => Outcome::failure("the phone number can not be null"),
///     if number == Some("") => Outcome::failure("the phone number can not be empty"),
///     else => Outcome::success(number.unwrap_or_default()),
/// };
///
/// assert_eq!(outcome.message(), Some("the phone number can not be null"));
/// ```
#[macro_export]
macro_rules! cond {
    (
        $(if $predicate:expr => $branch:expr,)*
        else => $default:expr $(,)?
    ) => {
        $crate::core::select(
            &$crate::core::otherwise(|| $default),
            &[$($crate::core::when(|| $predicate, || $branch)),*],
        )
    };
}
