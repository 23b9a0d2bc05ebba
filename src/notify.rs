use std::sync::Mutex;

use slog::{error, info, Logger};

/// How a notification is presented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message shown to the operator after a store operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            title: "Success!".to_owned(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            title: "Error".to_owned(),
            message: message.into(),
        }
    }
}

/// Where managers push their transient notifications. The UI layer
/// decides how to display them.
pub trait Notify: Send + Sync {
    fn push(&self, notification: Notification);
}

/// A notifier that writes notifications to the log, used by headless
/// composition roots.
pub struct LogNotifier {
    logger: Logger,
}

impl LogNotifier {
    pub fn new(logger: Logger) -> Self {
        LogNotifier { logger }
    }
}

impl Notify for LogNotifier {
    fn push(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => {
                info!(self.logger, "{}", notification.message; "title" => notification.title)
            }
            Severity::Error => {
                error!(self.logger, "{}", notification.message; "title" => notification.title)
            }
        }
    }
}

/// A notifier that keeps everything it is given, for inspection in
/// tests and non-interactive runs.
#[derive(Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything pushed so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl Notify for MemoryNotifier {
    fn push(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// The blocking yes/no prompt shown before a delete is dispatched.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything, for non-interactive composition roots.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
