//! User-facing notification center
//!
//! The toast analogue of the browser client: emitters push short
//! non-blocking notices, the rendering shell drains and displays them.
//! Every notice is mirrored to `tracing` so headless runs keep a record.

use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Clonable handle onto the shared notice queue
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier {
    /// Create a new notifier with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a success notice
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!("notice: {}", message);
        self.push(NoticeLevel::Success, message);
    }

    /// Push an informational notice
    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        info!("notice: {}", message);
        self.push(NoticeLevel::Info, message);
    }

    /// Push a warning notice
    pub fn warning(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("notice: {}", message);
        self.push(NoticeLevel::Warning, message);
    }

    /// Push an error notice
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("notice: {}", message);
        self.push(NoticeLevel::Error, message);
    }

    /// Take every pending notice, leaving the queue empty
    pub fn drain(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *notices)
    }

    /// Number of pending notices
    pub fn pending(&self) -> usize {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn push(&self, level: NoticeLevel, message: String) {
        let mut notices = self.notices.lock().unwrap_or_else(|e| e.into_inner());
        notices.push(Notice { level, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let notifier = Notifier::new();

        notifier.success("saved");
        notifier.warning("careful");
        assert_eq!(notifier.pending(), 2);

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[1].level, NoticeLevel::Warning);
        assert_eq!(notifier.pending(), 0);
    }

    #[test]
    fn clones_share_the_queue() {
        let notifier = Notifier::new();
        let clone = notifier.clone();

        clone.error("boom");
        assert_eq!(notifier.pending(), 1);
    }
}
