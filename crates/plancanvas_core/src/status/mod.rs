//! Save-status indication.
//!
//! # Responsibility
//! - Track the debounced Idle/Saving/Saved indicator state machine.
//! - Project the status line (text plus dot tier) shown by the UI.
//!
//! # Invariants
//! - At most one save deadline is pending at any time, always the one
//!   armed by the most recent edit.

pub mod save_status;
