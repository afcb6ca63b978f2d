//! Planner WASM API
//!
//! This module provides the JavaScript-facing API. Page glue calls these
//! exports from its event handlers; everything here is a thin wrapper that
//! converts arguments, delegates to the pure planners or the DOM passes, and
//! converts the result back.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization and error conversion shared by all exports
//! - `layout`: Day-view layout (pure and DOM-applying)
//! - `kanban`: Drop planning, goal/task requests, badges and filtering
//! - `schedule`: Time-slot prefill, auto-scroll, collapse preference

pub mod helpers;
pub mod layout;
pub mod kanban;
pub mod schedule;

pub use layout::{init_day_calendar, layout_day_events};
pub use kanban::{
    add_goal_modal_title, apply_category_filter, child_goal_type, goal_save_request,
    new_backlog_task_request, new_task_request, plan_kanban_drop, refresh_column_badges,
    task_delete_request, task_edit_request,
};
pub use schedule::{
    auto_scroll_target, auto_scroll_to_now, default_event_window, init_schedule_collapse,
    prefill_event_form,
};
