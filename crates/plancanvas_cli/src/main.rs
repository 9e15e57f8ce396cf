//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `plancanvas_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use plancanvas_core::{derive_section_preview, CanvasService};

fn main() {
    println!("plancanvas_core ping={}", plancanvas_core::ping());
    println!("plancanvas_core version={}", plancanvas_core::core_version());

    // Startup-state summary exercises the store and every derived
    // projection without touching timers.
    let service = CanvasService::with_defaults();
    println!(
        "canvas progress={}% completed={}/{}",
        service.progress_percent(),
        service.completion_count(),
        service.section_views().len()
    );
    for view in service.section_views() {
        println!(
            "section key={} chars={} tier={} completed={} preview={}",
            view.key,
            view.char_count,
            view.counter_tier.as_str(),
            view.completed,
            derive_section_preview(&view.content)
        );
    }
}
