//! Toast notifications shown after user actions.
//!
//! Purely advisory: nothing in the generation path depends on them.

use log::{info, warn};
use std::time::{Duration, Instant};

pub const PASSWORD_GENERATED: &str = "Password generated!";
pub const NO_CLASS_SELECTED: &str = "Please include at least one character specification.";
pub const NOTHING_TO_COPY: &str = "First generate a password. Then copy!";
pub const PASSWORD_COPIED: &str = "Password copied to clipboard!";

/// Default display time for a toast (3 seconds)
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= duration
    }
}

/// Queue of live toasts, oldest first.
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    duration: Duration,
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match kind {
            NotificationKind::Success => info!("{}", message),
            NotificationKind::Warning => warn!("{}", message),
        }
        self.items.push(Notification {
            kind,
            message,
            created_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Warning, message);
    }

    /// Drops every toast whose display time has run out.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.items.retain(|n| !n.is_expired(now, duration));
    }

    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        let duration = self.duration;
        self.items.iter().filter(move |n| !n.is_expired(now, duration))
    }

    /// Most recently pushed toast, expired or not.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
