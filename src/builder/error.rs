//! Build errors for guard and notification builders.

use thiserror::Error;

/// Errors that can occur when building guards and notifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Guard predicate not specified. Call .when(predicate)")]
    MissingPredicate,

    #[error("Guard branch not specified. Call .then(branch)")]
    MissingBranch,

    #[error("SMS sender not specified. Call .sender(sender) before .build()")]
    MissingSender,
}
