//! In-memory canvas state.
//!
//! # Responsibility
//! - Own the single mutable mapping from section id to section state.
//! - Derive completion count and progress from stored content.
//!
//! # Invariants
//! - Exactly one store instance per canvas session; all writes flow
//!   through the owning service, so no locking is needed here.
//! - Content lives in process memory only and is never persisted.

pub mod canvas_store;
