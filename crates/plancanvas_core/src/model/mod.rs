//! Domain model for the planning canvas.
//!
//! # Responsibility
//! - Define the canonical section data structures used by core logic.
//! - Keep every derived projection (completion, counter tier) a pure
//!   function of section content.
//!
//! # Invariants
//! - The section identifier set is closed; every id exists at startup and
//!   none is added or removed afterwards.

mod defaults;
pub mod section;
