//! Guards pairing a lazy predicate with a lazy branch.
//!
//! A guard does no work when it is built. Its predicate runs only when the
//! evaluator asks for it, and its branch runs only when it is selected.

use super::outcome::Outcome;

type Predicate<'a> = Box<dyn Fn() -> bool + 'a>;
type Branch<'a, T> = Box<dyn Fn() -> Outcome<T> + 'a>;

/// A predicate/branch pair evaluated by [`select`](super::select).
///
/// Both closures are zero-argument and may borrow the caller's locals, so
/// guards are normally built fresh for each evaluation. They hold no mutable
/// state and can be evaluated any number of times.
///
/// # Example
///
/// ```rust
/// use sms_notify::core::{Guard, Outcome};
///
/// let number = "";
/// let reject_empty = Guard::new(
///     || number.is_empty(),
///     || Outcome::<&str>::failure("the phone number can not be empty"),
/// );
///
/// assert!(reject_empty.check());
/// assert!(reject_empty.fire().is_failure());
/// ```
pub struct Guard<'a, T> {
    predicate: Predicate<'a>,
    branch: Branch<'a, T>,
}

impl<'a, T> Guard<'a, T> {
    /// Create a guard from a predicate and the branch it selects.
    ///
    /// Neither closure is invoked here.
    pub fn new<P, B>(predicate: P, branch: B) -> Self
    where
        P: Fn() -> bool + 'a,
        B: Fn() -> Outcome<T> + 'a,
    {
        Guard {
            predicate: Box::new(predicate),
            branch: Box::new(branch),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }

    /// Evaluate the branch.
    pub fn fire(&self) -> Outcome<T> {
        (self.branch)()
    }
}

/// The terminating guard of a chain: its predicate is always true.
///
/// Kept as its own type so that the evaluator can demand exactly one of
/// them at compile time.
pub struct DefaultGuard<'a, T> {
    branch: Branch<'a, T>,
}

impl<'a, T> DefaultGuard<'a, T> {
    pub fn new<B>(branch: B) -> Self
    where
        B: Fn() -> Outcome<T> + 'a,
    {
        DefaultGuard {
            branch: Box::new(branch),
        }
    }

    /// Always true.
    pub fn check(&self) -> bool {
        true
    }

    pub fn fire(&self) -> Outcome<T> {
        (self.branch)()
    }
}

impl<'a, T> From<DefaultGuard<'a, T>> for Guard<'a, T> {
    fn from(default: DefaultGuard<'a, T>) -> Self {
        Guard {
            predicate: Box::new(|| true),
            branch: default.branch,
        }
    }
}

/// Shorthand for [`Guard::new`].
pub fn when<'a, T, P, B>(predicate: P, branch: B) -> Guard<'a, T>
where
    P: Fn() -> bool + 'a,
    B: Fn() -> Outcome<T> + 'a,
{
    Guard::new(predicate, branch)
}

/// Shorthand for [`DefaultGuard::new`].
pub fn otherwise<'a, T, B>(branch: B) -> DefaultGuard<'a, T>
where
    B: Fn() -> Outcome<T> + 'a,
{
    DefaultGuard::new(branch)
}
