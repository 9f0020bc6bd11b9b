//! Notification delivery (mechanics only).
//!
//! Sinks are best-effort: delivery happens after the balance mutation has
//! already been applied, so a sink must not be able to fail the operation.

use std::sync::{Arc, Mutex};

use crate::notification::Notification;

/// Receiver of account notifications.
///
/// Implementations must be infallible from the caller's point of view;
/// anything that can go wrong stays inside the sink.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<S> NotificationSink for Arc<S>
where
    S: NotificationSink + ?Sized,
{
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Sink that prints the rendered message to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: &Notification) {
        println!("{}", notification.message());
    }
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: &Notification) {}
}

/// In-memory sink for tests/dev.
///
/// Records notifications in delivery order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in order.
    pub fn delivered(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Notifications are plain data; a poisoned lock still holds usable state.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        self.lock().push(notification.clone());
    }
}
