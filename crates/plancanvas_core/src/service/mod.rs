//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, notifier and flow state machines into use-case
//!   level APIs.
//! - Keep UI/FFI layers decoupled from state-machine details.

pub mod canvas_service;
