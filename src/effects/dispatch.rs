//! Description of the effect a notification resolves to.

use crate::effects::capabilities::{DiagnosticLog, SmsSender};
use serde::{Deserialize, Serialize};

/// The single effect a validated notification will perform.
///
/// Produced by [`Notification::prepare`](super::Notification::prepare)
/// without touching any capability, so callers decide when (or whether) to
/// run it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Dispatch {
    /// Deliver `message` to `number`
    Send { number: String, message: String },

    /// Record a diagnostic
    Log { message: String },
}

impl Dispatch {
    /// True when the effect delivers an SMS.
    pub fn is_send(&self) -> bool {
        matches!(self, Dispatch::Send { .. })
    }

    /// Run the effect against the given capabilities.
    ///
    /// Exactly one of `sender` / `logger` is invoked, exactly once.
    pub fn run(self, sender: &dyn SmsSender, logger: &dyn DiagnosticLog) {
        match self {
            Dispatch::Send { number, message } => sender.send(&number, &message),
            Dispatch::Log { message } => logger.log(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(String, String)>>,
        logged: Mutex<Vec<String>>,
    }

    impl SmsSender for Recorder {
        fn send(&self, number: &str, message: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((number.to_string(), message.to_string()));
        }
    }

    impl DiagnosticLog for Recorder {
        fn log(&self, message: &str) {
            self.logged.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn send_dispatch_only_sends() {
        let recorder = Recorder::default();
        let dispatch = Dispatch::Send {
            number: "+33615229808".to_string(),
            message: "Salut !".to_string(),
        };

        assert!(dispatch.is_send());
        dispatch.run(&recorder, &recorder);

        assert_eq!(
            *recorder.sent.lock().unwrap(),
            vec![("+33615229808".to_string(), "Salut !".to_string())]
        );
        assert!(recorder.logged.lock().unwrap().is_empty());
    }

    #[test]
    fn log_dispatch_only_logs() {
        let recorder = Recorder::default();
        let dispatch = Dispatch::Log {
            message: "rejected".to_string(),
        };

        assert!(!dispatch.is_send());
        dispatch.run(&recorder, &recorder);

        assert!(recorder.sent.lock().unwrap().is_empty());
        assert_eq!(*recorder.logged.lock().unwrap(), vec!["rejected".to_string()]);
    }

    #[test]
    fn dispatch_serializes_with_effect_tag() {
        let dispatch = Dispatch::Log {
            message: "rejected".to_string(),
        };

        let json = serde_json::to_value(&dispatch).unwrap();
        assert_eq!(json["effect"], "log");
        assert_eq!(json["message"], "rejected");
    }
}
