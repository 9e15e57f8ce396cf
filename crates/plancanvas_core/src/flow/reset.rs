//! Reset confirmation modal.
//!
//! # Responsibility
//! - Track whether the reset confirmation dialog is visible.
//! - Distinguish how the dialog was dismissed, for diagnostics only.
//!
//! # Invariants
//! - Confirm only succeeds while the dialog is visible; the actual reset
//!   work belongs to the service layer, not the modal.

/// Status-line message shown after a confirmed reset.
pub const RESET_SUCCESS_TEXT: &str = "Canvas reset successfully!";

/// Visibility state of the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

/// How a visible dialog was dismissed without confirming.
///
/// All reasons behave identically; the distinction only feeds log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CancelButton,
    BackdropClick,
    EscapeKey,
}

impl DismissReason {
    /// Stable string id used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CancelButton => "cancel_button",
            Self::BackdropClick => "backdrop_click",
            Self::EscapeKey => "escape_key",
        }
    }

    /// Resolves a string id from the UI boundary.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "cancel_button" => Some(Self::CancelButton),
            "backdrop_click" => Some(Self::BackdropClick),
            "escape_key" => Some(Self::EscapeKey),
            _ => None,
        }
    }
}

/// Two-state machine behind the reset confirmation dialog.
#[derive(Debug, Clone)]
pub struct ResetConfirmFlow {
    state: ModalState,
}

impl ResetConfirmFlow {
    /// Creates a hidden dialog.
    pub fn new() -> Self {
        Self {
            state: ModalState::Hidden,
        }
    }

    /// Current visibility.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Shows the dialog. Returns false when it was already visible.
    pub fn request(&mut self) -> bool {
        if self.state == ModalState::Visible {
            return false;
        }
        self.state = ModalState::Visible;
        true
    }

    /// Hides the dialog without confirming.
    ///
    /// Returns false when the dialog was not visible (Escape with no dialog
    /// open is a routine no-op).
    pub fn dismiss(&mut self, _reason: DismissReason) -> bool {
        if self.state == ModalState::Hidden {
            return false;
        }
        self.state = ModalState::Hidden;
        true
    }

    /// Confirms and hides the dialog.
    ///
    /// Returns whether the confirmation counted; callers perform the reset
    /// work only on true.
    pub fn confirm(&mut self) -> bool {
        if self.state == ModalState::Hidden {
            return false;
        }
        self.state = ModalState::Hidden;
        true
    }
}

impl Default for ResetConfirmFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DismissReason, ModalState, ResetConfirmFlow};

    #[test]
    fn request_then_confirm_round_trip() {
        let mut flow = ResetConfirmFlow::new();
        assert_eq!(flow.state(), ModalState::Hidden);

        assert!(flow.request());
        assert_eq!(flow.state(), ModalState::Visible);

        assert!(flow.confirm());
        assert_eq!(flow.state(), ModalState::Hidden);
    }

    #[test]
    fn confirm_without_dialog_is_noop() {
        let mut flow = ResetConfirmFlow::new();
        assert!(!flow.confirm());
    }

    #[test]
    fn every_dismiss_reason_hides_the_dialog() {
        for reason in [
            DismissReason::CancelButton,
            DismissReason::BackdropClick,
            DismissReason::EscapeKey,
        ] {
            let mut flow = ResetConfirmFlow::new();
            flow.request();
            assert!(flow.dismiss(reason));
            assert_eq!(flow.state(), ModalState::Hidden);
        }
    }
}
