//! Single-slot notification state.

use std::fmt::Display;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Notification severity, controlling presentation and the default
/// auto-dismiss duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Default auto-dismiss duration for this severity, in milliseconds.
    pub fn default_duration_ms(self) -> u64 {
        match self {
            Severity::Error => 4_000,
            Severity::Success | Severity::Warning | Severity::Info => 3_000,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// The four observable fields read by the rendering collaborator.
///
/// A `duration_ms` of `0` means no auto-dismiss. The fields are always
/// internally consistent: they only ever change together, within one
/// [`display`](NotificationStore::display) or
/// [`dismiss`](NotificationStore::dismiss) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    pub visible: bool,
    pub severity: Severity,
    pub message: String,
    pub duration_ms: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            visible: false,
            severity: Severity::Success,
            message: String::new(),
            duration_ms: 3_000,
        }
    }
}

/// Handle identifying one registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionHandle(u64);

type SubscriberFn = Arc<dyn Fn(&NotificationState) + Send + Sync>;

struct Inner {
    state: NotificationState,
    subscribers: Vec<(u64, SubscriberFn)>,
    next_subscriber_id: u64,
}

/// Holds the single currently-displayed notification.
///
/// Latest-wins: every [`display`](Self::display) unconditionally overwrites
/// the previous content, whether or not it was still visible. There is no
/// queue, no merging, and no history. The store schedules no auto-dismiss
/// timer; `duration_ms` is data for the rendering collaborator, which must
/// take care not to let a timer armed for a superseded notification hide a
/// newer one.
///
/// One instance is constructed at application start and shared as
/// `Arc<NotificationStore>`; it lives for the process lifetime.
pub struct NotificationStore {
    inner: Mutex<Inner>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: NotificationState::default(),
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            }),
        }
    }

    /// Displays a notification, overwriting all four state fields.
    ///
    /// Callers wanting the severity-specific default duration use the
    /// [`success`](Self::success), [`error`](Self::error),
    /// [`warning`](Self::warning), or [`info`](Self::info) wrappers.
    pub fn display(&self, message: impl Into<String>, severity: Severity, duration_ms: u64) {
        let message = message.into();
        self.update(|state| {
            state.visible = true;
            state.severity = severity;
            state.message = message;
            state.duration_ms = duration_ms;
        });
    }

    /// Hides the notification, retaining message, severity, and duration so
    /// a fade-out transition can still read them. Idempotent.
    pub fn dismiss(&self) {
        self.update(|state| {
            state.visible = false;
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.display(message, Severity::Success, Severity::Success.default_duration_ms());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.display(message, Severity::Error, Severity::Error.default_duration_ms());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.display(message, Severity::Warning, Severity::Warning.default_duration_ms());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.display(message, Severity::Info, Severity::Info.default_duration_ms());
    }

    /// Returns a consistent copy of the current state.
    pub fn snapshot(&self) -> NotificationState {
        self.lock_inner().state.clone()
    }

    /// Registers a callback invoked synchronously, with the new state, on
    /// every `display` and `dismiss`.
    pub fn subscribe(&self, callback: impl Fn(&NotificationState) + Send + Sync + 'static) -> SubscriptionHandle {
        let mut inner = self.lock_inner();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        SubscriptionHandle(id)
    }

    /// Removes a subscriber. Unknown or already-removed handles are a no-op.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.lock_inner().subscribers.retain(|(id, _)| *id != handle.0);
    }

    fn update(&self, apply: impl FnOnce(&mut NotificationState)) {
        let (state, subscribers) = {
            let mut inner = self.lock_inner();
            apply(&mut inner.state);
            (inner.state.clone(), inner.subscribers.clone())
        };

        // Invoked outside the lock so a callback may re-enter the store.
        for (_, subscriber) in &subscribers {
            subscriber(&state);
        }
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        // State mutations cannot panic mid-update; a poisoned lock still
        // holds a consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
