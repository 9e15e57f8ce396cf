//! Timed export-to-print flow.
//!
//! # Responsibility
//! - Sequence the print preparation: disable the trigger, wait, request
//!   the platform print dialog, then revert after a blind timeout.
//!
//! # Invariants
//! - The platform dialog is an emitted action the UI performs; the flow
//!   never calls the platform itself.
//! - The revert deadline is blind: no print-completion signal exists at
//!   this boundary, so the flow reverts on time alone.
//! - `begin` while the flow is busy is a no-op; the trigger stays disabled
//!   for the whole sequence.

use std::time::{Duration, Instant};

/// Delay between starting an export and requesting the print dialog,
/// leaving the UI a beat to apply its print layout.
pub const PRINT_DELAY: Duration = Duration::from_millis(500);

/// Blind delay after the print request before the trigger re-enables and
/// the print layout reverts.
pub const REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Phase of the export sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    /// No export in progress; the trigger is enabled.
    Idle,
    /// Print layout is being prepared; the dialog request is pending.
    Preparing,
    /// Dialog requested; waiting out the blind revert timeout.
    WindingDown,
}

/// Event emitted by an export deadline firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportEvent {
    /// The UI should invoke the platform print dialog now.
    PrintDialogRequested,
    /// The sequence is over: re-enable the trigger, revert print layout.
    Finished,
}

/// State machine for the export action.
#[derive(Debug, Clone)]
pub struct ExportFlow {
    phase: ExportPhase,
    deadline: Option<Instant>,
}

impl ExportFlow {
    /// Creates an idle flow.
    pub fn new() -> Self {
        Self {
            phase: ExportPhase::Idle,
            deadline: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ExportPhase {
        self.phase
    }

    /// Whether the export trigger should be disabled.
    pub fn busy(&self) -> bool {
        self.phase != ExportPhase::Idle
    }

    /// Whether the print-preparation visual mode is active.
    pub fn print_mode_active(&self) -> bool {
        self.busy()
    }

    /// Starts the export sequence.
    ///
    /// Returns false (and changes nothing) when a sequence is already
    /// running.
    pub fn begin(&mut self, now: Instant) -> bool {
        if self.busy() {
            return false;
        }
        self.phase = ExportPhase::Preparing;
        self.deadline = Some(now + PRINT_DELAY);
        true
    }

    /// Fires the current deadline if it has elapsed.
    ///
    /// At most one event per call; the service polls until quiescent.
    pub fn poll(&mut self, now: Instant) -> Option<ExportEvent> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        match self.phase {
            ExportPhase::Preparing => {
                // The revert window counts from the scheduled print moment,
                // not from however late this poll arrived.
                self.phase = ExportPhase::WindingDown;
                self.deadline = Some(deadline + REVERT_DELAY);
                Some(ExportEvent::PrintDialogRequested)
            }
            ExportPhase::WindingDown => {
                self.phase = ExportPhase::Idle;
                self.deadline = None;
                Some(ExportEvent::Finished)
            }
            ExportPhase::Idle => None,
        }
    }

    /// Pending deadline, for UI timer scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for ExportFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportEvent, ExportFlow, ExportPhase, PRINT_DELAY, REVERT_DELAY};
    use std::time::{Duration, Instant};

    #[test]
    fn begin_is_rejected_while_busy() {
        let t0 = Instant::now();
        let mut flow = ExportFlow::new();

        assert!(flow.begin(t0));
        assert!(!flow.begin(t0 + Duration::from_millis(100)));
        assert_eq!(flow.phase(), ExportPhase::Preparing);
    }

    #[test]
    fn full_sequence_fires_print_then_finish() {
        let t0 = Instant::now();
        let mut flow = ExportFlow::new();
        flow.begin(t0);

        assert_eq!(flow.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(
            flow.poll(t0 + PRINT_DELAY),
            Some(ExportEvent::PrintDialogRequested)
        );
        assert!(flow.busy());

        assert_eq!(flow.poll(t0 + PRINT_DELAY + REVERT_DELAY - Duration::from_millis(1)), None);
        assert_eq!(
            flow.poll(t0 + PRINT_DELAY + REVERT_DELAY),
            Some(ExportEvent::Finished)
        );
        assert!(!flow.busy());
        assert_eq!(flow.next_deadline(), None);
    }

    #[test]
    fn late_poll_keeps_revert_anchored_to_print_deadline() {
        let t0 = Instant::now();
        let mut flow = ExportFlow::new();
        flow.begin(t0);

        // Poll arrives well past the print deadline; the revert deadline is
        // still print-time + revert-delay.
        let late = t0 + Duration::from_millis(900);
        assert_eq!(flow.poll(late), Some(ExportEvent::PrintDialogRequested));
        assert_eq!(flow.next_deadline(), Some(t0 + PRINT_DELAY + REVERT_DELAY));
    }
}
