//! Phone-number validation followed by a send-or-log dispatch.

use crate::core::{otherwise, select, when, Outcome};
use crate::effects::capabilities::{DiagnosticLog, PhoneValidator, SmsSender};
use crate::effects::dispatch::Dispatch;
use std::sync::Arc;
use tracing::debug;

pub const NULL_NUMBER_MESSAGE: &str = "the phone number can not be null";
pub const EMPTY_NUMBER_MESSAGE: &str = "the phone number can not be empty";

/// Failure reason for a number the validator does not accept.
pub fn invalid_number_message(number: &str, region: &str) -> String {
    format!("the phone number {number} is not valid for region {region}")
}

/// Diagnostic written to the log when a notification is rejected.
pub fn rejection_message(reason: &str) -> String {
    format!("notification rejected: {reason}")
}

/// Validates phone numbers and dispatches either an SMS or a diagnostic.
///
/// Capabilities are injected once and reused for every call; use
/// [`NotificationBuilder`](crate::builder::NotificationBuilder) to assemble
/// one with defaults.
pub struct Notification {
    validator: Arc<dyn PhoneValidator>,
    sender: Arc<dyn SmsSender>,
    logger: Arc<dyn DiagnosticLog>,
}

impl Notification {
    pub fn new(
        validator: Arc<dyn PhoneValidator>,
        sender: Arc<dyn SmsSender>,
        logger: Arc<dyn DiagnosticLog>,
    ) -> Self {
        Self {
            validator,
            sender,
            logger,
        }
    }

    /// Validate `number` against `region` without performing any effect.
    ///
    /// Guards run in this order: absent number, empty number, number not
    /// valid for the region. A validator error counts as "not valid".
    pub fn validate(&self, number: Option<&str>, region: &str) -> Outcome<String> {
        select(
            &otherwise(|| Outcome::success(number.unwrap_or_default().to_owned())),
            &[
                when(|| number.is_none(), || Outcome::failure(NULL_NUMBER_MESSAGE)),
                when(|| number == Some(""), || Outcome::failure(EMPTY_NUMBER_MESSAGE)),
                when(
                    || !self.is_valid(number, region),
                    || {
                        Outcome::failure(invalid_number_message(
                            number.unwrap_or_default(),
                            region,
                        ))
                    },
                ),
            ],
        )
    }

    /// Validate and immediately send the message or log the rejection.
    ///
    /// Exactly one of the sender or the logger is invoked, exactly once.
    pub fn send_notification(&self, number: Option<&str>, region: &str, message: &str) {
        self.validate(number, region).resolve(
            |number| {
                debug!(%number, region, "phone number accepted");
                self.sender.send(&number, message);
            },
            |reason| {
                debug!(%reason, "phone number rejected");
                self.logger.log(&rejection_message(&reason));
            },
        )
    }

    /// Validate and describe the effect to run, without running it.
    pub fn prepare(&self, number: Option<&str>, region: &str, message: &str) -> Dispatch {
        self.validate(number, region).resolve(
            |number| Dispatch::Send {
                number,
                message: message.to_owned(),
            },
            |reason| Dispatch::Log {
                message: rejection_message(&reason),
            },
        )
    }

    /// Run a previously prepared effect with this notification's capabilities.
    pub fn dispatch(&self, dispatch: Dispatch) {
        dispatch.run(self.sender.as_ref(), self.logger.as_ref());
    }

    /// Validate now, and return an action that performs the effect later.
    pub fn deferred<'a>(
        &'a self,
        number: Option<&str>,
        region: &str,
        message: &str,
    ) -> impl FnOnce() + 'a {
        let dispatch = self.prepare(number, region, message);
        move || self.dispatch(dispatch)
    }

    fn is_valid(&self, number: Option<&str>, region: &str) -> bool {
        let Some(number) = number else {
            return false;
        };

        self.validator
            .validate(number, region)
            .unwrap_or_else(|error| {
                debug!(%error, "validator error treated as invalid number");
                false
            })
    }
}
