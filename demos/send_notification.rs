//! Sending Notifications
//!
//! This example walks through the three ways of driving a notification.
//!
//! Key concepts:
//! - Eager dispatch: validate and send/log in one call
//! - Prepared dispatch: inspect the chosen effect before running it
//! - Deferred action: validate now, perform the effect later
//!
//! Run with: cargo run --example send_notification

use sms_notify::builder::NotificationBuilder;
use sms_notify::effects::{DiagnosticLog, Dispatch, SmsSender};

// Console-backed capabilities standing in for a real SMS gateway and logger
struct ConsoleSms;

impl SmsSender for ConsoleSms {
    fn send(&self, number: &str, message: &str) {
        println!("  >>> SMS to {number}: {message}");
    }
}

struct ConsoleLog;

impl DiagnosticLog for ConsoleLog {
    fn log(&self, message: &str) {
        println!("  ### {message}");
    }
}

fn main() {
    println!("=== Sending Notifications ===\n");

    let notification = NotificationBuilder::new()
        .sender(ConsoleSms)
        .logger(ConsoleLog)
        .build()
        .expect("sender is configured");

    // Eager dispatch
    println!("Eager dispatch:");
    let inputs: [(Option<&str>, &str); 4] = [
        (Some("+33615229808"), "FR"),
        (Some("+33615229808123"), "FR"),
        (Some(""), "FR"),
        (None, "FR"),
    ];
    for (number, region) in inputs {
        notification.send_notification(number, region, "Salut !");
    }

    // Prepared dispatch: the effect is a plain value until it is run
    println!("\nPrepared dispatch:");
    let dispatch = notification.prepare(Some("+33615229808"), "FR", "Your code is 4217");
    match &dispatch {
        Dispatch::Send { number, .. } => println!("  about to text {number}"),
        Dispatch::Log { message } => println!("  about to log: {message}"),
    }
    notification.dispatch(dispatch);

    // Deferred action
    println!("\nDeferred action:");
    let action = notification.deferred(Some("+33615229808123"), "FR", "Salut !");
    println!("  validated, nothing performed yet");
    action();

    println!("\n=== Example Complete ===");
}
