//! Customer notifications (sink abstraction + stock sinks).
//!
//! Accounts notify their customer after every successful mutating operation.
//! The sink is a pluggable collaborator: the console sink reproduces the
//! classic printed message, while the recording sink captures notifications
//! for tests/dev.

pub mod notification;
pub mod sink;

pub use notification::{Notification, Operation};
pub use sink::{ConsoleSink, NotificationSink, NullSink, RecordingSink};
