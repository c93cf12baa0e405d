//! User-visible notification channel.
//!
//! DESIGN
//! ======
//! A fire-and-forget capability handed to the guard and the response
//! interceptor; neither needs a handle on any UI type. The banner component
//! renders whatever was emitted last. Notices are not queued for replay and
//! not deduplicated.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// Severity of a user-visible notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
}

/// A single user-visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Capability for emitting notices; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    /// Emit an error notice.
    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text.into());
    }

    /// Emit a warning notice.
    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Warning, text.into());
    }

    fn push(&self, level: NoticeLevel, text: String) {
        log::info!("notice: {text}");
        self.notices.update(|all| all.push(Notice { level, text }));
    }

    /// The most recent notice, if any. Tracked when read inside a view.
    pub fn latest(&self) -> Option<Notice> {
        self.notices.with(|all| all.last().cloned())
    }

    /// Untracked copy of every notice emitted so far, oldest first.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.with_untracked(Clone::clone)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
