//! Builder for assembling a notification from its capabilities.

use crate::builder::error::BuildError;
use crate::effects::{
    DiagnosticLog, LibPhoneValidator, Notification, PhoneValidator, SmsSender, TracingLog,
};
use std::sync::Arc;

/// Builder for [`Notification`] with a fluent API.
///
/// The validator defaults to [`LibPhoneValidator`] and the logger to
/// [`TracingLog`]. The sender has no default and must be supplied.
///
/// # Example
///
/// ```
/// use sms_notify::builder::NotificationBuilder;
/// use sms_notify::effects::TracingSender;
///
/// let notification = NotificationBuilder::new()
///     .sender(TracingSender)
///     .build()
///     .unwrap();
///
/// notification.send_notification(Some(""), "FR", "Salut !");
/// ```
#[derive(Default)]
pub struct NotificationBuilder {
    validator: Option<Arc<dyn PhoneValidator>>,
    sender: Option<Arc<dyn SmsSender>>,
    logger: Option<Arc<dyn DiagnosticLog>>,
}

impl NotificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phone validator (optional).
    pub fn validator(self, validator: impl PhoneValidator + 'static) -> Self {
        self.shared_validator(Arc::new(validator))
    }

    /// Reuse a validator instance shared with other notifications.
    pub fn shared_validator(mut self, validator: Arc<dyn PhoneValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the SMS sender (required).
    pub fn sender(self, sender: impl SmsSender + 'static) -> Self {
        self.shared_sender(Arc::new(sender))
    }

    pub fn shared_sender(mut self, sender: Arc<dyn SmsSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the diagnostic logger (optional).
    pub fn logger(self, logger: impl DiagnosticLog + 'static) -> Self {
        self.shared_logger(Arc::new(logger))
    }

    pub fn shared_logger(mut self, logger: Arc<dyn DiagnosticLog>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<Notification, BuildError> {
        let sender = self.sender.ok_or(BuildError::MissingSender)?;
        let validator = self
            .validator
            .unwrap_or_else(|| Arc::new(LibPhoneValidator));
        let logger = self.logger.unwrap_or_else(|| Arc::new(TracingLog));

        Ok(Notification::new(validator, sender, logger))
    }
}
