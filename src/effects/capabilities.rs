//! Capabilities the notification shell depends on.
//!
//! Validation, sending and diagnostic logging live outside the pure core.
//! They are expressed as traits so that a [`Notification`](super::Notification)
//! can be handed real implementations in production and recording fakes in
//! tests.

use phonenumber::country;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors a phone validator may report instead of a verdict.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Could not parse phone number '{number}': {reason}")]
    Parse { number: String, reason: String },
}

/// Decides whether a number is valid for a region.
pub trait PhoneValidator: Send + Sync {
    /// Returns `Ok(true)` for a valid number, `Ok(false)` for a well-formed
    /// but invalid one, and `Err` when the number cannot be parsed at all.
    fn validate(&self, number: &str, region: &str) -> Result<bool, ValidationError>;
}

/// Delivers a message to a phone number.
pub trait SmsSender: Send + Sync {
    fn send(&self, number: &str, message: &str);
}

/// Records a diagnostic message.
pub trait DiagnosticLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Validator backed by the `phonenumber` metadata database.
///
/// The region is an ISO 3166-1 alpha-2 code such as `"FR"`. It is only
/// consulted for numbers without a leading `+`; an empty or unknown region
/// is an error only when the number cannot be parsed without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneValidator;

impl PhoneValidator for LibPhoneValidator {
    fn validate(&self, number: &str, region: &str) -> Result<bool, ValidationError> {
        let parsed = match region.parse::<country::Id>() {
            Ok(id) => phonenumber::parse(Some(id), number).map_err(|e| ValidationError::Parse {
                number: number.to_owned(),
                reason: e.to_string(),
            })?,
            // Numbers carrying their own `+` country code need no region.
            Err(_) => phonenumber::parse(None, number)
                .map_err(|_| ValidationError::UnknownRegion(region.to_owned()))?,
        };

        let valid = phonenumber::is_valid(&parsed);
        debug!(number, region, valid, "validated phone number");
        Ok(valid)
    }
}

/// Diagnostic log that writes through `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn log(&self, message: &str) {
        warn!(target: "sms_notify::diagnostics", "{message}");
    }
}

/// Stand-in SMS service that only records the send through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSender;

impl SmsSender for TracingSender {
    fn send(&self, number: &str, message: &str) {
        info!(number, body = message, "sending SMS");
    }
}
