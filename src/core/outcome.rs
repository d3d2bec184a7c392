//! Two-variant outcome produced by guard evaluation.
//!
//! An outcome is consumed through a single operation, [`Outcome::resolve`],
//! which takes one continuation per variant and runs exactly one of them.

use serde::{Deserialize, Serialize};

/// Result of evaluating a guard chain.
///
/// Either a `Success` carrying the accepted value, or a `Failure` carrying a
/// human-readable reason. Outcomes are plain values: they are built once,
/// never mutated, and owned by whoever produced them until consumed.
///
/// # Example
///
/// ```rust
/// use sms_notify::core::Outcome;
///
/// let outcome: Outcome<&str> = Outcome::failure("the phone number can not be empty");
///
/// let line = outcome.resolve(
///     |number| format!("sending to {number}"),
///     |reason| format!("rejected: {reason}"),
/// );
///
/// assert_eq!(line, "rejected: the phone number can not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The input was accepted
    Success(T),

    /// The input was rejected, with the reason
    Failure(String),
}

impl<T> Outcome<T> {
    /// Build a successful outcome.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Build a failed outcome.
    ///
    /// The message is stored as given, empty or not, exactly as
    /// deserialization does. Callers that log it are expected to supply a
    /// readable reason.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    /// Consume the outcome with one continuation per variant.
    ///
    /// Exactly one of `on_success` / `on_failure` is invoked, exactly once.
    /// Both continuations return the same type, which becomes the return
    /// value of `resolve`; use `()` when the continuations only perform
    /// side effects.
    pub fn resolve<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(String) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(message) => on_failure(message),
        }
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Accepted value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Failure reason, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    /// Transform the success payload, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, String> {
        self.resolve(Ok, Err)
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
