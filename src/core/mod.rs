//! Pure guarded-expression core.
//!
//! This module contains the side-effect-free part of the crate:
//! - `Outcome`, the two-variant result of an evaluation
//! - `Guard` and `DefaultGuard`, lazy predicate/branch pairs
//! - `select`, the first-match-wins evaluator
//!
//! Nothing here performs I/O. Effects are chosen by the caller when the
//! outcome is resolved (see [`crate::effects`]).

mod guard;
mod outcome;
mod select;

pub use guard::{otherwise, when, DefaultGuard, Guard};
pub use outcome::Outcome;
pub use select::select;
