//! Transient user-facing notifications.
//!
//! Core logic reports success and errors through the [`Notifier`] trait;
//! the UI implementation keeps a short queue of toasts that expire.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts kept on screen
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Sink for transient notifications
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: String);

    fn success(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeKind::Success, message.into());
    }

    fn error(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeKind::Error, message.into());
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NoticeKind,
    pub message: String,
    pub created: Instant,
}

/// Toast queue rendered in the top-right corner
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    /// Drop toasts older than the TTL
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: NoticeKind, message: String) {
        match kind {
            NoticeKind::Error => tracing::warn!(%message, "error notice"),
            NoticeKind::Success => tracing::info!(%message, "success notice"),
        }
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            kind,
            message,
            created: Instant::now(),
        });
    }
}
