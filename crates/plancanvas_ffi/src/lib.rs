//! FFI crate for the PlanCanvas UI runtime.

pub mod api;
