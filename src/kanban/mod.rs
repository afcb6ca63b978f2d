//! Kanban board planning
//!
//! Pure decision logic behind the kanban board: what to send to the server
//! when a card is dropped, how goal forms are routed, and which cards a
//! category filter hides. The DOM side lives in `crate::dom::kanban`.

pub mod drop_plan;
pub mod filter;
pub mod goal_form;
pub mod tasks;

pub use drop_plan::{plan_drop, DropEvent, DropPlan};
pub use filter::{category_options, categories_request, is_hidden_by_filter, ALL_CATEGORIES_LABEL};
pub use goal_form::{add_goal_modal_title, child_goal_type, goal_save_request};
pub use tasks::{
    new_backlog_task_request, new_task_request, resolve_task_edit, task_delete_request,
    task_edit_request, TaskEdit,
};
