//! Canvas use-case service.
//!
//! # Responsibility
//! - Own the store, the save-status notifier and the interaction flows as
//!   the session's single mutator.
//! - Translate string-keyed UI operations into state mutations and UI
//!   events.
//!
//! # Invariants
//! - Every mutation that changes content also notifies the save-status
//!   machine; progress is derived on read, never cached.
//! - Operations referencing unknown section keys are silent no-ops.
//! - All timing is deadline-based; `tick` is the only place deadlines fire.

use crate::flow::export::{ExportEvent, ExportFlow};
use crate::flow::reset::{DismissReason, ModalState, ResetConfirmFlow, RESET_SUCCESS_TEXT};
use crate::model::section::{CounterTier, SectionId, ALL_SECTIONS};
use crate::status::save_status::{SaveStatus, SaveStatusNotifier, StatusLine};
use crate::store::canvas_store::CanvasStore;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How long a just-cleared section stays visually highlighted.
pub const CLEAR_HIGHLIGHT: Duration = Duration::from_millis(500);

/// Character cap for content previews in log lines.
pub const PREVIEW_MAX_CHARS: usize = 64;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Event the UI should react to, produced by operations and by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The save indicator changed state.
    SaveStatusChanged(SaveStatus),
    /// A transient status message expired; re-render the status line.
    StatusLineReverted,
    /// The UI should open the platform print dialog now.
    PrintDialogRequested,
    /// Export sequence over: re-enable the trigger, drop print layout.
    ExportFinished,
    /// A clear-feedback highlight expired for this section.
    ClearHighlightExpired(SectionId),
}

/// Read-only per-section snapshot for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    /// Stable string key, the shared contract with the UI layer.
    pub key: String,
    /// User-facing section title.
    pub title: String,
    /// Current full content.
    pub content: String,
    /// Character count of the raw content.
    pub char_count: usize,
    /// Display tier for the character counter.
    pub counter_tier: CounterTier,
    /// Whether the section counts toward progress.
    pub completed: bool,
    /// Whether the clear-feedback highlight is currently active.
    pub clear_highlight: bool,
}

/// Use-case facade over the whole canvas session.
///
/// One instance per session; the owning runtime (FFI global or CLI main)
/// guarantees exclusive access, so the service itself stays lock-free.
#[derive(Debug)]
pub struct CanvasService {
    store: CanvasStore,
    notifier: SaveStatusNotifier,
    export: ExportFlow,
    reset_modal: ResetConfirmFlow,
    clear_highlights: BTreeMap<SectionId, Instant>,
}

impl CanvasService {
    /// Creates a session with the pre-filled startup canvas.
    pub fn with_defaults() -> Self {
        Self::from_store(CanvasStore::with_defaults())
    }

    /// Creates a session with an entirely empty canvas.
    pub fn empty() -> Self {
        Self::from_store(CanvasStore::empty())
    }

    fn from_store(store: CanvasStore) -> Self {
        Self {
            store,
            notifier: SaveStatusNotifier::new(),
            export: ExportFlow::new(),
            reset_modal: ResetConfirmFlow::new(),
            clear_highlights: BTreeMap::new(),
        }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &CanvasStore {
        &self.store
    }

    /// Applies an edit event carrying the full replacement text.
    ///
    /// # Contract
    /// - Unknown keys are a silent no-op returning no events.
    /// - Every applied edit re-arms the save debounce and emits `Saving`.
    pub fn edit_section(&mut self, key: &str, content: &str, now: Instant) -> Vec<UiEvent> {
        if !self.store.apply_edit(key, content) {
            return Vec::new();
        }
        debug!(
            "event=section_edit module=service status=ok section={} chars={} preview={}",
            key.trim(),
            content.chars().count(),
            derive_section_preview(content)
        );
        vec![UiEvent::SaveStatusChanged(self.notifier.notify_edit(now))]
    }

    /// Manual save request (keyboard shortcut path).
    ///
    /// Same coalescing rules as an edit: re-arms the one debounce deadline.
    pub fn manual_save(&mut self, now: Instant) -> Vec<UiEvent> {
        vec![UiEvent::SaveStatusChanged(self.notifier.notify_edit(now))]
    }

    /// Clears one section to empty content and arms its feedback highlight.
    pub fn clear_section(&mut self, key: &str, now: Instant) -> Vec<UiEvent> {
        let id = match SectionId::from_key(key) {
            Ok(id) => id,
            Err(err) => {
                debug!("event=clear_dropped module=service status=noop reason={err}");
                return Vec::new();
            }
        };
        self.store.clear(id);
        self.clear_highlights.insert(id, now + CLEAR_HIGHLIGHT);
        info!(
            "event=section_cleared module=service status=ok section={}",
            id.as_str()
        );
        vec![UiEvent::SaveStatusChanged(self.notifier.notify_edit(now))]
    }

    /// Opens the reset confirmation dialog.
    pub fn request_reset(&mut self) -> bool {
        let shown = self.reset_modal.request();
        if shown {
            debug!("event=reset_modal_shown module=service status=ok");
        }
        shown
    }

    /// Dismisses the reset dialog without resetting.
    pub fn dismiss_reset(&mut self, reason: DismissReason) -> bool {
        let dismissed = self.reset_modal.dismiss(reason);
        if dismissed {
            debug!(
                "event=reset_modal_dismissed module=service status=ok reason={}",
                reason.as_str()
            );
        }
        dismissed
    }

    /// Confirms the reset dialog and restores the whole canvas.
    ///
    /// # Contract
    /// - No-op unless the dialog is visible.
    /// - Restores every section default (free-notes to empty), re-arms the
    ///   save debounce, and shows the transient success message.
    pub fn confirm_reset(&mut self, now: Instant) -> Vec<UiEvent> {
        if !self.reset_modal.confirm() {
            return Vec::new();
        }
        self.store.reset_all();
        self.notifier.show_message(RESET_SUCCESS_TEXT, now);
        info!(
            "event=canvas_reset module=service status=ok progress={}",
            self.store.progress_percent()
        );
        vec![UiEvent::SaveStatusChanged(self.notifier.notify_edit(now))]
    }

    /// Current visibility of the reset dialog.
    pub fn reset_modal_state(&self) -> ModalState {
        self.reset_modal.state()
    }

    /// Starts the export sequence; false when it is already running.
    pub fn begin_export(&mut self, now: Instant) -> bool {
        let started = self.export.begin(now);
        if started {
            info!("event=export_started module=service status=ok");
        } else {
            debug!("event=export_skipped module=service status=noop reason=busy");
        }
        started
    }

    /// Whether the export trigger should be disabled.
    pub fn export_busy(&self) -> bool {
        self.export.busy()
    }

    /// Whether the print-preparation visual mode is active.
    pub fn print_mode_active(&self) -> bool {
        self.export.print_mode_active()
    }

    /// Fires every elapsed deadline and returns the resulting UI events.
    ///
    /// The UI runtime calls this from its timer callback; one call drains
    /// everything currently due.
    pub fn tick(&mut self, now: Instant) -> Vec<UiEvent> {
        let mut events = Vec::new();

        if let Some(status) = self.notifier.poll(now) {
            events.push(UiEvent::SaveStatusChanged(status));
        }
        if self.notifier.poll_message(now) {
            events.push(UiEvent::StatusLineReverted);
        }
        while let Some(event) = self.export.poll(now) {
            events.push(match event {
                ExportEvent::PrintDialogRequested => {
                    info!("event=print_dialog_requested module=service status=ok");
                    UiEvent::PrintDialogRequested
                }
                ExportEvent::Finished => {
                    info!("event=export_finished module=service status=ok");
                    UiEvent::ExportFinished
                }
            });
        }
        let expired: Vec<SectionId> = self
            .clear_highlights
            .iter()
            .filter(|(_, expires_at)| now >= **expires_at)
            .map(|(id, _)| *id)
            .collect();
        for id in expired {
            self.clear_highlights.remove(&id);
            events.push(UiEvent::ClearHighlightExpired(id));
        }

        events
    }

    /// Earliest armed deadline across every machine, for timer scheduling.
    ///
    /// Returns `None` when nothing is pending and the UI needs no timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        let highlight = self.clear_highlights.values().min().copied();
        [
            self.notifier.next_deadline(),
            self.export.next_deadline(),
            highlight,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Current save indicator machine state.
    pub fn save_status(&self) -> SaveStatus {
        self.notifier.status()
    }

    /// Status line as the UI should render it.
    pub fn status_line(&self) -> StatusLine {
        self.notifier.status_line()
    }

    /// Overall progress percentage.
    pub fn progress_percent(&self) -> u8 {
        self.store.progress_percent()
    }

    /// Number of completed sections.
    pub fn completion_count(&self) -> usize {
        self.store.completion_count()
    }

    /// Snapshot of one section.
    pub fn section_view(&self, id: SectionId) -> SectionView {
        let section = self.store.section(id);
        SectionView {
            key: id.as_str().to_string(),
            title: id.title().to_string(),
            content: section.content.clone(),
            char_count: section.char_count(),
            counter_tier: section.counter_tier(),
            completed: section.completed(),
            clear_highlight: self.clear_highlights.contains_key(&id),
        }
    }

    /// Snapshots of every section in canonical order.
    pub fn section_views(&self) -> Vec<SectionView> {
        ALL_SECTIONS.map(|id| self.section_view(id)).to_vec()
    }
}

/// Derives a single-line, length-capped preview of section content.
///
/// Whitespace runs collapse to one space so multi-paragraph content stays
/// on one log or summary line.
pub fn derive_section_preview(content: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(content.trim(), " ");
    let mut preview: String = collapsed.chars().take(PREVIEW_MAX_CHARS).collect();
    if collapsed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}
