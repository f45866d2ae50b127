//! Transient notifications ("toasts") with auto-dismiss.
//!
//! Showing a notification schedules its dismissal on the tokio runtime. A new
//! notification replaces the current one and cancels the pending dismissal,
//! so an earlier timer can never close a later notification.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Default,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Default,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// What a notification display should currently render.
///
/// Hiding keeps the last notification around so a closing animation can still
/// show its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub open: bool,
    pub current: Option<Notification>,
}

#[derive(Debug, Default)]
struct Shared {
    state: NotificationState,
    // Bumped on every show; a dismiss timer only closes its own generation.
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Notifier {
    shared: Arc<Mutex<Shared>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `notification`, replacing whatever is shown.
    ///
    /// Outside a tokio runtime the notification stays open until [`Notifier::hide`].
    pub fn show(&self, notification: Notification) {
        let duration = notification.duration;
        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.state = NotificationState {
                open: true,
                current: Some(notification),
            };
            shared.generation
        };

        let dismiss = match Handle::try_current() {
            Ok(handle) => {
                let shared = Arc::clone(&self.shared);
                Some(handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    let mut shared = shared.lock();
                    if shared.generation == generation {
                        shared.state.open = false;
                    }
                }))
            }
            Err(_) => {
                debug!("No runtime available; notification will not auto-dismiss");
                None
            }
        };

        let previous = std::mem::replace(&mut *self.pending.lock(), dismiss);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Closes the current notification immediately.
    pub fn hide(&self) {
        self.shared.lock().state.open = false;
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    pub fn state(&self) -> NotificationState {
        self.shared.lock().state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.shared.lock().state.open
    }
}
