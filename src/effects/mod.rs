//! Effectful shell around the pure core.
//!
//! The core decides *which* effect should happen by producing an
//! [`Outcome`](crate::core::Outcome); this module performs it.
//!
//! # Key Concepts
//!
//! - **Capabilities**: validation, sending and logging are injected traits
//! - **Notification**: validates a number and resolves the outcome into
//!   exactly one effect
//! - **Dispatch**: a description of that effect, for callers that want to
//!   decide when it runs

mod capabilities;
mod dispatch;
mod notification;

pub use capabilities::{
    DiagnosticLog, LibPhoneValidator, PhoneValidator, SmsSender, TracingLog, TracingSender,
    ValidationError,
};
pub use dispatch::Dispatch;
pub use notification::{
    invalid_number_message, rejection_message, Notification, EMPTY_NUMBER_MESSAGE,
    NULL_NUMBER_MESSAGE,
};
