//! End-to-end notification behaviour with the real phone-number validator.

use sms_notify::builder::NotificationBuilder;
use sms_notify::core::Outcome;
use sms_notify::effects::{
    rejection_message, DiagnosticLog, Dispatch, LibPhoneValidator, Notification, SmsSender,
    EMPTY_NUMBER_MESSAGE, NULL_NUMBER_MESSAGE,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    sent: Mutex<Vec<(String, String)>>,
    logged: Mutex<Vec<String>>,
}

impl Recorder {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    fn logged(&self) -> Vec<String> {
        self.logged.lock().unwrap().clone()
    }
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

fn setup() -> (Notification, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let notification = NotificationBuilder::new()
        .validator(LibPhoneValidator)
        .shared_sender(recorder.clone())
        .shared_logger(recorder.clone())
        .build()
        .unwrap();
    (notification, recorder)
}

#[test]
fn valid_number_is_sent_once() {
    let (notification, recorder) = setup();

    notification.send_notification(Some("+33615229808"), "FR", "Test message");

    assert_eq!(
        recorder.sent(),
        vec![("+33615229808".to_string(), "Test message".to_string())]
    );
    assert!(recorder.logged().is_empty());
}

#[test]
fn absent_number_is_logged_once() {
    let (notification, recorder) = setup();

    assert_eq!(
        notification.validate(None, "FR"),
        Outcome::failure(NULL_NUMBER_MESSAGE)
    );

    notification.send_notification(None, "FR", "Test message");

    let logged = recorder.logged();
    assert_eq!(logged.len(), 1);
    assert!(logged[0].contains(NULL_NUMBER_MESSAGE));
    assert!(recorder.sent().is_empty());
}

#[test]
fn empty_number_is_logged_once() {
    let (notification, recorder) = setup();

    assert_eq!(
        notification.validate(Some(""), "FR"),
        Outcome::failure(EMPTY_NUMBER_MESSAGE)
    );

    notification.send_notification(Some(""), "FR", "Test message");

    let logged = recorder.logged();
    assert_eq!(logged.len(), 1);
    assert!(logged[0].contains(EMPTY_NUMBER_MESSAGE));
    assert!(recorder.sent().is_empty());
}

#[test]
fn region_invalid_number_is_logged_with_exact_reason() {
    let (notification, recorder) = setup();
    let reason = "the phone number +33615229808123 is not valid for region FR";

    assert_eq!(
        notification.validate(Some("+33615229808123"), "FR"),
        Outcome::failure(reason)
    );

    notification.send_notification(Some("+33615229808123"), "FR", "Test message");

    assert_eq!(recorder.logged(), vec![rejection_message(reason)]);
    assert!(recorder.sent().is_empty());
}

#[test]
fn unparseable_number_is_reported_as_invalid() {
    let (notification, recorder) = setup();

    notification.send_notification(Some("invalid"), "FR", "Test message");

    assert_eq!(
        recorder.logged(),
        vec![rejection_message(
            "the phone number invalid is not valid for region FR"
        )]
    );
    assert!(recorder.sent().is_empty());
}

#[test]
fn deferred_action_performs_effect_when_run() {
    let (notification, recorder) = setup();

    let action = notification.deferred(Some("+33615229808"), "FR", "Salut !");
    assert!(recorder.sent().is_empty());

    action();

    assert_eq!(
        recorder.sent(),
        vec![("+33615229808".to_string(), "Salut !".to_string())]
    );
    assert!(recorder.logged().is_empty());
}

#[test]
fn prepared_dispatch_can_be_run_later() {
    let (notification, recorder) = setup();

    let dispatch = notification.prepare(None, "FR", "Salut !");
    assert!(matches!(dispatch, Dispatch::Log { .. }));
    assert!(recorder.logged().is_empty());

    notification.dispatch(dispatch);

    assert_eq!(recorder.logged(), vec![rejection_message(NULL_NUMBER_MESSAGE)]);
    assert!(recorder.sent().is_empty());
}

#[test]
fn international_number_is_sent_without_region() {
    let (notification, recorder) = setup();

    notification.send_notification(Some("+33615229808"), "", "Test message");

    assert_eq!(
        recorder.sent(),
        vec![("+33615229808".to_string(), "Test message".to_string())]
    );
    assert!(recorder.logged().is_empty());
}
