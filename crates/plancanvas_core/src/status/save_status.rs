//! Debounced save-status state machine.
//!
//! # Responsibility
//! - Coalesce rapid edits into a single Saving -> Saved cycle per quiet
//!   period.
//! - Manage the transient override message shown after a canvas reset.
//!
//! # Invariants
//! - `notify_edit` in any state cancels the pending deadline before arming
//!   a new one; only the newest deadline can ever fire.
//! - `poll` transitions to Saved at most once per armed deadline.
//! - There is no persistence behind Saved; the state is pure UI feedback.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Quiet period after the last edit before the indicator reports Saved.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// How long a transient override message stays on the status line.
pub const STATUS_MESSAGE_VISIBLE: Duration = Duration::from_millis(3000);

/// Status-line text while a save deadline is pending.
pub const SAVING_TEXT: &str = "Saving...";

/// Status-line text when no save is pending.
pub const SAVED_TEXT: &str = "All changes saved automatically";

/// Indicator state reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    /// Nothing has been edited yet this session.
    Idle,
    /// An edit happened within the debounce window.
    Saving,
    /// The debounce window elapsed without further edits.
    Saved,
}

impl SaveStatus {
    /// Stable string id used in snapshots and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Saving => "saving",
            Self::Saved => "saved",
        }
    }

    /// Status-line text for this state.
    ///
    /// Idle shows the saved text: a fresh canvas has no unsaved edits.
    pub fn label(self) -> &'static str {
        match self {
            Self::Saving => SAVING_TEXT,
            Self::Idle | Self::Saved => SAVED_TEXT,
        }
    }

    /// Dot tier accompanying the status text.
    pub fn dot(self) -> DotTier {
        match self {
            Self::Saving => DotTier::Amber,
            Self::Idle | Self::Saved => DotTier::Green,
        }
    }
}

/// Color tier of the status dot. Concrete colors are a UI concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotTier {
    Green,
    Amber,
}

/// Snapshot of the status line as the UI should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    /// Text to display; an active override message wins over the status
    /// label.
    pub text: String,
    /// Dot tier; always derived from the underlying status, never from the
    /// override message.
    pub dot: DotTier,
}

#[derive(Debug, Clone)]
struct OverrideMessage {
    text: String,
    expires_at: Instant,
}

/// Debounced notifier behind the auto-save indicator.
#[derive(Debug, Clone)]
pub struct SaveStatusNotifier {
    status: SaveStatus,
    deadline: Option<Instant>,
    message: Option<OverrideMessage>,
}

impl SaveStatusNotifier {
    /// Creates a notifier in the Idle state with nothing pending.
    pub fn new() -> Self {
        Self {
            status: SaveStatus::Idle,
            deadline: None,
            message: None,
        }
    }

    /// Current machine state.
    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Registers an edit: enter Saving and re-arm the debounce deadline.
    ///
    /// # Contract
    /// - Valid in every state; an earlier pending deadline is cancelled, so
    ///   rapid edits coalesce into one Saved transition.
    /// - Returns the emitted state (always Saving) so callers can forward
    ///   it to the UI immediately.
    pub fn notify_edit(&mut self, now: Instant) -> SaveStatus {
        self.deadline = Some(now + SAVE_DEBOUNCE);
        self.status = SaveStatus::Saving;
        self.status
    }

    /// Fires the save deadline if it has elapsed.
    ///
    /// Returns the Saved transition when it happens, `None` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<SaveStatus> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.status = SaveStatus::Saved;
                Some(self.status)
            }
            _ => None,
        }
    }

    /// Shows a transient message on the status line.
    ///
    /// The message replaces the status text for [`STATUS_MESSAGE_VISIBLE`]
    /// and then reverts; the underlying state machine is unaffected.
    pub fn show_message(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(OverrideMessage {
            text: text.into(),
            expires_at: now + STATUS_MESSAGE_VISIBLE,
        });
    }

    /// Expires the transient message if its deadline has elapsed.
    ///
    /// Returns true when the status line just reverted to the status label.
    pub fn poll_message(&mut self, now: Instant) -> bool {
        match &self.message {
            Some(message) if now >= message.expires_at => {
                self.message = None;
                true
            }
            _ => false,
        }
    }

    /// Status line as the UI should render it right now.
    pub fn status_line(&self) -> StatusLine {
        let text = match &self.message {
            Some(message) => message.text.clone(),
            None => self.status.label().to_string(),
        };
        StatusLine {
            text,
            dot: self.status.dot(),
        }
    }

    /// Earliest pending deadline, for UI timer scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        let message_deadline = self.message.as_ref().map(|m| m.expires_at);
        match (self.deadline, message_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, deadline) => deadline,
        }
    }
}

impl Default for SaveStatusNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{SaveStatus, SaveStatusNotifier, SAVE_DEBOUNCE, SAVED_TEXT, SAVING_TEXT};
    use std::time::{Duration, Instant};

    #[test]
    fn starts_idle_with_saved_text() {
        let notifier = SaveStatusNotifier::new();
        assert_eq!(notifier.status(), SaveStatus::Idle);
        assert_eq!(notifier.status_line().text, SAVED_TEXT);
        assert_eq!(notifier.next_deadline(), None);
    }

    #[test]
    fn edit_enters_saving_and_arms_deadline() {
        let t0 = Instant::now();
        let mut notifier = SaveStatusNotifier::new();

        assert_eq!(notifier.notify_edit(t0), SaveStatus::Saving);
        assert_eq!(notifier.status_line().text, SAVING_TEXT);
        assert_eq!(notifier.next_deadline(), Some(t0 + SAVE_DEBOUNCE));
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let t0 = Instant::now();
        let mut notifier = SaveStatusNotifier::new();
        notifier.notify_edit(t0);

        assert_eq!(notifier.poll(t0 + Duration::from_millis(999)), None);
        assert_eq!(notifier.status(), SaveStatus::Saving);
    }

    #[test]
    fn poll_fires_exactly_once_per_deadline() {
        let t0 = Instant::now();
        let mut notifier = SaveStatusNotifier::new();
        notifier.notify_edit(t0);

        let fire_at = t0 + SAVE_DEBOUNCE;
        assert_eq!(notifier.poll(fire_at), Some(SaveStatus::Saved));
        assert_eq!(notifier.poll(fire_at + Duration::from_secs(5)), None);
    }
}
