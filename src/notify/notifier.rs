//! The notification dispatch capability injected into the normalizer.

use std::sync::Arc;

use super::store::NotificationStore;

/// Best-effort notification sink.
///
/// Implementations report whether the notification was delivered; callers
/// treat `false` as a swallowed dispatch failure, never as an error.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str) -> bool;
    fn notify_error(&self, message: &str) -> bool;
}

/// Discards every notification.
///
/// For hosts that render no notifications, and as a test default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify_success(&self, _message: &str) -> bool {
        true
    }

    fn notify_error(&self, _message: &str) -> bool {
        true
    }
}

/// Forwards notifications into a shared [`NotificationStore`] with the
/// severity-specific default durations.
#[derive(Clone)]
pub struct StoreNotifier {
    store: Arc<NotificationStore>,
}

impl StoreNotifier {
    pub fn new(store: Arc<NotificationStore>) -> Self {
        Self { store }
    }
}

impl Notifier for StoreNotifier {
    fn notify_success(&self, message: &str) -> bool {
        self.store.success(message);
        true
    }

    fn notify_error(&self, message: &str) -> bool {
        self.store.error(message);
        true
    }
}
