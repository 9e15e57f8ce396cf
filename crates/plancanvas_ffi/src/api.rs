//! FFI use-case API for the canvas UI runtime.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI layer via FRB.
//! - Own the wall clock and the one process-global canvas session.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - String keys and event kinds are stable wire contracts.
//! - Core stays clock-free; every timed operation stamps `Instant::now()`
//!   here.

use log::{info, warn};
use plancanvas_core::{
    core_version as core_version_inner, derive_section_preview, init_logging as init_logging_inner,
    ping as ping_inner, CanvasService, DismissReason, DotTier, ModalState, SectionId, UiEvent,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Instant;

struct Session {
    prefilled: bool,
    service: Mutex<CanvasService>,
}

static SESSION: OnceLock<Session> = OnceLock::new();

fn session(prefilled_if_new: bool) -> &'static Session {
    SESSION.get_or_init(|| {
        info!("event=canvas_session_created module=ffi status=ok prefilled={prefilled_if_new}");
        Session {
            prefilled: prefilled_if_new,
            service: Mutex::new(if prefilled_if_new {
                CanvasService::with_defaults()
            } else {
                CanvasService::empty()
            }),
        }
    })
}

fn lock_service(session: &Session) -> MutexGuard<'_, CanvasService> {
    // A poisoned lock means a panic already crossed this state; the panic
    // hook has logged it, and the state machines stay usable.
    match session.service.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn with_service<T>(f: impl FnOnce(&mut CanvasService) -> T) -> T {
    let session = session(true);
    let mut guard = lock_service(session);
    f(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return an
///   error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the process-global canvas session.
///
/// Input semantics:
/// - `prefilled`: true for the pre-filled startup canvas, false for an
///   entirely empty one.
///
/// # FFI contract
/// - Optional: any canvas call opens a prefilled session implicitly.
/// - Re-opening with the same mode is idempotent; a conflicting mode
///   returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn open_canvas(prefilled: bool) -> String {
    let session = session(prefilled);
    if session.prefilled != prefilled {
        warn!(
            "event=canvas_reopen_rejected module=ffi status=error active_prefilled={}",
            session.prefilled
        );
        return format!(
            "canvas already open with prefilled={}; refusing to reopen with prefilled={prefilled}",
            session.prefilled
        );
    }
    String::new()
}

/// UI event record returned by mutating calls and `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEventView {
    /// Stable event kind id.
    pub kind: String,
    /// Section key, for per-section events.
    pub section: Option<String>,
    /// Save status id, for save-status events.
    pub status: Option<String>,
}

fn event_view(event: UiEvent) -> UiEventView {
    match event {
        UiEvent::SaveStatusChanged(status) => UiEventView {
            kind: "save_status_changed".to_string(),
            section: None,
            status: Some(status.as_str().to_string()),
        },
        UiEvent::StatusLineReverted => UiEventView {
            kind: "status_line_reverted".to_string(),
            section: None,
            status: None,
        },
        UiEvent::PrintDialogRequested => UiEventView {
            kind: "print_dialog_requested".to_string(),
            section: None,
            status: None,
        },
        UiEvent::ExportFinished => UiEventView {
            kind: "export_finished".to_string(),
            section: None,
            status: None,
        },
        UiEvent::ClearHighlightExpired(id) => UiEventView {
            kind: "clear_highlight_expired".to_string(),
            section: Some(id.as_str().to_string()),
            status: None,
        },
    }
}

fn event_views(events: Vec<UiEvent>) -> Vec<UiEventView> {
    events.into_iter().map(event_view).collect()
}

/// Applies an edit event carrying the full replacement text.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown section keys are a silent no-op returning no events.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_section(section: String, content: String) -> Vec<UiEventView> {
    let now = Instant::now();
    with_service(|service| event_views(service.edit_section(&section, &content, now)))
}

/// Clears one section and starts its feedback highlight.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown section keys are a silent no-op returning no events.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_section(section: String) -> Vec<UiEventView> {
    let now = Instant::now();
    with_service(|service| event_views(service.clear_section(&section, now)))
}

/// Manual save request (keyboard shortcut path); coalesces like an edit.
#[flutter_rust_bridge::frb(sync)]
pub fn manual_save() -> Vec<UiEventView> {
    let now = Instant::now();
    with_service(|service| event_views(service.manual_save(now)))
}

/// Fires every elapsed deadline; the UI calls this from timer callbacks.
///
/// # FFI contract
/// - Sync call, non-blocking; one call drains everything currently due.
#[flutter_rust_bridge::frb(sync)]
pub fn tick() -> Vec<UiEventView> {
    let now = Instant::now();
    with_service(|service| event_views(service.tick(now)))
}

/// Milliseconds until the earliest pending deadline, or -1 when none.
///
/// # FFI contract
/// - Sync call, non-blocking; the UI uses this to arm its next timer.
#[flutter_rust_bridge::frb(sync)]
pub fn millis_until_next_deadline() -> i64 {
    with_service(|service| match service.next_deadline() {
        Some(deadline) => deadline
            .saturating_duration_since(Instant::now())
            .as_millis() as i64,
        None => -1,
    })
}

/// Per-section snapshot record for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionItemView {
    /// Stable section key.
    pub key: String,
    /// User-facing title.
    pub title: String,
    /// Current full content.
    pub content: String,
    /// Character count of the raw content.
    pub char_count: u64,
    /// Counter tier id (`neutral|warning|alert`).
    pub counter_tier: String,
    /// Whether the section counts toward progress.
    pub completed: bool,
    /// Whether the clear-feedback highlight is active.
    pub clear_highlight: bool,
    /// Single-line capped preview for list displays.
    pub preview: String,
}

/// Snapshots of every section in canonical canvas order.
#[flutter_rust_bridge::frb(sync)]
pub fn section_views() -> Vec<SectionItemView> {
    with_service(|service| {
        service
            .section_views()
            .into_iter()
            .map(|view| SectionItemView {
                preview: derive_section_preview(&view.content),
                key: view.key,
                title: view.title,
                char_count: view.char_count as u64,
                counter_tier: view.counter_tier.as_str().to_string(),
                completed: view.completed,
                clear_highlight: view.clear_highlight,
                content: view.content,
            })
            .collect()
    })
}

/// Current content of one section; empty string for unknown keys.
#[flutter_rust_bridge::frb(sync)]
pub fn section_content(section: String) -> String {
    with_service(|service| match SectionId::from_key(&section) {
        Ok(id) => service.store().content(id).to_string(),
        Err(_) => String::new(),
    })
}

/// Overall canvas progress as a rounded percentage.
#[flutter_rust_bridge::frb(sync)]
pub fn progress_percent() -> u32 {
    with_service(|service| u32::from(service.progress_percent()))
}

/// Number of completed sections.
#[flutter_rust_bridge::frb(sync)]
pub fn completion_count() -> u32 {
    with_service(|service| service.completion_count() as u32)
}

/// Save-status line record for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLineView {
    /// Text to display next to the dot.
    pub text: String,
    /// Dot tier id (`green|amber`).
    pub dot: String,
}

/// Status line as the UI should render it right now.
#[flutter_rust_bridge::frb(sync)]
pub fn status_line() -> StatusLineView {
    with_service(|service| {
        let line = service.status_line();
        StatusLineView {
            text: line.text,
            dot: match line.dot {
                DotTier::Green => "green".to_string(),
                DotTier::Amber => "amber".to_string(),
            },
        }
    })
}

/// Opens the reset confirmation dialog; false when already visible.
#[flutter_rust_bridge::frb(sync)]
pub fn request_reset() -> bool {
    with_service(|service| service.request_reset())
}

/// Dismisses the reset dialog without resetting.
///
/// Input semantics:
/// - `reason`: `cancel_button|backdrop_click|escape_key`; unrecognized
///   values count as the cancel button.
#[flutter_rust_bridge::frb(sync)]
pub fn dismiss_reset(reason: String) -> bool {
    let reason = DismissReason::from_key(&reason).unwrap_or(DismissReason::CancelButton);
    with_service(|service| service.dismiss_reset(reason))
}

/// Confirms the reset dialog and restores the whole canvas.
///
/// # FFI contract
/// - No-op returning no events unless the dialog is visible.
#[flutter_rust_bridge::frb(sync)]
pub fn confirm_reset() -> Vec<UiEventView> {
    let now = Instant::now();
    with_service(|service| event_views(service.confirm_reset(now)))
}

/// Whether the reset confirmation dialog is visible.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_modal_visible() -> bool {
    with_service(|service| service.reset_modal_state() == ModalState::Visible)
}

/// Starts the export sequence; false while one is already running.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_export() -> bool {
    let now = Instant::now();
    with_service(|service| service.begin_export(now))
}

/// Whether the export trigger should be disabled.
#[flutter_rust_bridge::frb(sync)]
pub fn export_busy() -> bool {
    with_service(|service| service.export_busy())
}

/// Whether the print-preparation visual mode is active.
#[flutter_rust_bridge::frb(sync)]
pub fn print_mode_active() -> bool {
    with_service(|service| service.print_mode_active())
}
