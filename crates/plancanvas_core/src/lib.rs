//! Core domain logic for the PlanCanvas planning template.
//! This crate is the single source of truth for canvas state, progress and
//! save-indicator behavior; the visual layer lives outside the workspace.

pub mod flow;
pub mod logging;
pub mod model;
pub mod service;
pub mod status;
pub mod store;

pub use flow::export::{ExportEvent, ExportFlow, ExportPhase, PRINT_DELAY, REVERT_DELAY};
pub use flow::reset::{DismissReason, ModalState, ResetConfirmFlow, RESET_SUCCESS_TEXT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::section::{
    CounterTier, Section, SectionId, SectionKeyError, ALL_SECTIONS, COMPLETION_MIN_CHARS,
    COUNTER_ALERT_CHARS, COUNTER_WARNING_CHARS, SECTION_COUNT,
};
pub use service::canvas_service::{
    derive_section_preview, CanvasService, SectionView, UiEvent, CLEAR_HIGHLIGHT,
};
pub use status::save_status::{
    DotTier, SaveStatus, SaveStatusNotifier, StatusLine, SAVED_TEXT, SAVE_DEBOUNCE, SAVING_TEXT,
    STATUS_MESSAGE_VISIBLE,
};
pub use store::canvas_store::CanvasStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
