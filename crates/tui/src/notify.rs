//! Toast notifications.
//!
//! The [`Notifier`] is the application's notification service: state
//! coordinators call [`Notifier::notify`] (or the severity shorthands) and
//! the toasts appear in a tray rendered over the board. The notifier must
//! be initialized with a tray handle before first use; until then,
//! notifications are dropped with a logged warning rather than failing the
//! caller.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::warn;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Something needs the user's attention but nothing failed.
    Warn,
    /// Neutral information.
    Info,
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Severity, controlling the tray color.
    pub kind: ToastKind,
    /// One-line headline.
    pub summary: String,
    /// Supporting detail shown under the headline.
    pub detail: String,
    /// When this toast stops being shown.
    pub expires_at: Instant,
}

/// The queue of currently visible toasts.
///
/// The tray is pruned each frame; expired toasts disappear without any
/// further bookkeeping by the code that raised them.
#[derive(Debug, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
}

impl ToastTray {
    /// Creates an empty tray.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast to the tray.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Drops every toast whose lifetime has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Returns the currently visible toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    /// Returns `true` if no toasts are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Shared handle to the toast tray.
///
/// The app owns the tray for rendering; the notifier holds a clone for
/// writing. Contention is nil (one thread of control), the mutex just
/// satisfies the sharing.
pub type SharedTray = Arc<Mutex<ToastTray>>;

/// The notification service consumed by the state coordinator.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use taskdeck_tui::notify::{Notifier, ToastKind, ToastTray};
///
/// let tray = Arc::new(Mutex::new(ToastTray::new()));
/// let mut notifier = Notifier::new(Duration::from_secs(3));
///
/// // Before init, notifications are dropped (with a logged warning).
/// notifier.success("Ignored", "tray not attached yet");
/// assert!(tray.lock().unwrap().is_empty());
///
/// notifier.init(Arc::clone(&tray));
/// notifier.success("Task added", "Design homepage mockup");
/// assert_eq!(tray.lock().unwrap().visible().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Notifier {
    tray: Option<SharedTray>,
    default_duration: Duration,
}

impl Notifier {
    /// Creates a notifier that is not yet attached to a tray.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            tray: None,
            default_duration,
        }
    }

    /// Attaches the rendering tray. Must be called before notifications
    /// are shown; earlier calls are dropped.
    pub fn init(&mut self, tray: SharedTray) {
        self.tray = Some(tray);
    }

    /// Returns `true` if the notifier has been attached to a tray.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.tray.is_some()
    }

    /// Shows a toast with an explicit duration.
    pub fn notify_for(
        &self,
        kind: ToastKind,
        summary: impl Into<String>,
        detail: impl Into<String>,
        duration: Duration,
    ) {
        let Some(tray) = &self.tray else {
            warn!("toast tray not initialized; dropping notification");
            return;
        };

        let toast = Toast {
            kind,
            summary: summary.into(),
            detail: detail.into(),
            expires_at: Instant::now() + duration,
        };

        match tray.lock() {
            Ok(mut tray) => tray.push(toast),
            // A poisoned tray only means a render panicked mid-lock; the
            // toast data itself is still sound.
            Err(poisoned) => poisoned.into_inner().push(toast),
        }
    }

    /// Shows a toast with the default duration.
    pub fn notify(&self, kind: ToastKind, summary: impl Into<String>, detail: impl Into<String>) {
        self.notify_for(kind, summary, detail, self.default_duration);
    }

    /// Shows a success toast.
    pub fn success(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.notify(ToastKind::Success, summary, detail);
    }

    /// Shows an error toast.
    pub fn error(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.notify(ToastKind::Error, summary, detail);
    }

    /// Shows a warning toast.
    pub fn warn(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.notify(ToastKind::Warn, summary, detail);
    }

    /// Shows an info toast.
    pub fn info(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.notify(ToastKind::Info, summary, detail);
    }
}
