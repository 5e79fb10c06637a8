//! Notification port.
//!
//! State transitions never talk to the UI directly; components that need to
//! surface a user-visible notice go through this trait. The UI layer decides
//! how a message is rendered.

use tracing::info;

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that logs messages through tracing. Used by the CLI binary and
/// anywhere no real UI is attached.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}

/// Notifier that drops every message.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}
