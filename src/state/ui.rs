//! Chrome state: dark mode and the transient notice toast.
//!
//! DESIGN
//! ======
//! Kept apart from domain state so presentation concerns never leak into
//! the collection machines. The notice carries a sequence counter so a
//! repeated message still restarts the expiry timer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient, user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// UI chrome state shared across pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl UiState {
    /// Show a notice, bumping the sequence so expiry timers re-arm.
    pub fn push_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice { kind, text: text.into() });
        self.notice_seq += 1;
    }

    /// Clear the notice only if no newer one replaced it since `seq`.
    pub fn clear_notice_if(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}
