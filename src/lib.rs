//! Planner WASM Module
//!
//! Browser-side interaction layer for the planner web app: day-view event
//! layout, kanban drop planning, and the small schedule helpers the day page
//! needs. Layout and planning are pure Rust and testable natively; the `dom`
//! module applies their results to the page.

pub mod error;
pub mod models;
pub mod html_layout;
pub mod kanban;
pub mod schedule;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use error::PlannerError;
pub use models::{ApiRequest, BoardKind, GoalType, HttpMethod, IntervalEvent};
pub use html_layout::{DayDisplayList, DayLayoutEngine, LayoutConfig, RenderEvent};

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Planner WASM module initialized");
}
