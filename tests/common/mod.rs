// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use conto::domain::{AccountId, Notifier};

/// Floating-point comparison with a fixed tolerance
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Email {
        to: String,
        subject: String,
        body: String,
    },
    Sms {
        to: String,
        body: String,
    },
    Activity {
        account_id: AccountId,
        activity: String,
    },
}

/// Notifier test double that records every call. Cloning shares the
/// underlying buffer, so a clone kept by the test observes calls made
/// through the clone handed to the account.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    pub fn activities(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Activity { activity, .. } => Some(activity.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn email_count(&self) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Email { .. }))
            .count()
    }

    pub fn sms_count(&self) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Sms { .. }))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        self.sent.borrow_mut().push(Notification::Email {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
    }

    fn send_sms(&self, to: &str, body: &str) {
        self.sent.borrow_mut().push(Notification::Sms {
            to: to.to_string(),
            body: body.to_string(),
        });
    }

    fn log_activity(&self, account_id: AccountId, activity: &str) {
        self.sent.borrow_mut().push(Notification::Activity {
            account_id,
            activity: activity.to_string(),
        });
    }
}
