//! Builder for constructing guards piece by piece.

use crate::builder::error::BuildError;
use crate::core::{Guard, Outcome};

type Predicate<'a> = Box<dyn Fn() -> bool + 'a>;
type Branch<'a, T> = Box<dyn Fn() -> Outcome<T> + 'a>;

/// Builder for guards with a fluent API.
///
/// Useful when the predicate and branch are decided in different places;
/// both must be supplied before [`build`](GuardBuilder::build) succeeds.
pub struct GuardBuilder<'a, T> {
    predicate: Option<Predicate<'a>>,
    branch: Option<Branch<'a, T>>,
}

impl<'a, T: 'a> GuardBuilder<'a, T> {
    pub fn new() -> Self {
        Self {
            predicate: None,
            branch: None,
        }
    }

    /// Set the predicate (required).
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn() -> bool + 'a,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set the branch (required).
    pub fn then<B>(mut self, branch: B) -> Self
    where
        B: Fn() -> Outcome<T> + 'a,
    {
        self.branch = Some(Box::new(branch));
        self
    }

    /// Set a branch that fails with a fixed message.
    pub fn fails_with(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.then(move || Outcome::failure(message.clone()))
    }

    pub fn build(self) -> Result<Guard<'a, T>, BuildError> {
        let predicate = self.predicate.ok_or(BuildError::MissingPredicate)?;
        let branch = self.branch.ok_or(BuildError::MissingBranch)?;

        Ok(Guard::new(predicate, branch))
    }
}

impl<'a, T: 'a> Default for GuardBuilder<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
