//! Kanban exports

use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use crate::dom;
use crate::kanban::{self as planner, DropEvent};
use crate::models::BoardKind;
use super::helpers::{deserialize, page_document, serialize, to_js_error};

/// Plan the requests for a finished drag
///
/// # Parameters
/// - `drop_js`: `DropEvent` built from Sortable's `onEnd` event
///
/// # Returns
/// A `DropPlan`: `{requests, reload, badge_count}`
#[wasm_bindgen(js_name = planKanbanDrop)]
pub fn plan_kanban_drop(drop_js: JsValue) -> Result<JsValue, JsValue> {
    let drop: DropEvent = deserialize(drop_js, "Invalid drop event")?;
    let plan = planner::plan_drop(&drop);
    serialize(&plan, "Failed to serialize drop plan")
}

/// Item ids of a column element, top to bottom
#[wasm_bindgen(js_name = columnItemIds)]
pub fn column_item_ids(column: &web_sys::Element) -> Vec<String> {
    dom::kanban::column_item_ids(column)
}

/// Recount the card badges of every column on a board ("tasks" or "goals")
#[wasm_bindgen(js_name = refreshColumnBadges)]
pub fn refresh_column_badges(board: Option<String>) -> Result<(), JsValue> {
    let board = BoardKind::from_data_type(board.as_deref());
    let document = page_document()?;
    dom::kanban::refresh_column_badges(&document, board).map_err(to_js_error)
}

/// Goal type for the add-goal modal, e.g. "quarterly"
#[wasm_bindgen(js_name = childGoalType)]
pub fn child_goal_type(parent_type: Option<String>, page_type: Option<String>) -> String {
    planner::child_goal_type(parent_type.as_deref(), page_type.as_deref())
        .as_str()
        .to_string()
}

/// "Add Quarterly Goal" style title for a parent/page type
#[wasm_bindgen(js_name = addGoalModalTitle)]
pub fn add_goal_modal_title(parent_type: Option<String>, page_type: Option<String>) -> String {
    let goal_type = planner::child_goal_type(parent_type.as_deref(), page_type.as_deref());
    planner::add_goal_modal_title(goal_type)
}

/// Save request for the submitted goal form entries
#[wasm_bindgen(js_name = goalSaveRequest)]
pub fn goal_save_request(form_js: JsValue) -> Result<JsValue, JsValue> {
    let form: Map<String, Value> = deserialize(form_js, "Invalid goal form")?;
    serialize(&planner::goal_save_request(&form), "Failed to serialize goal request")
}

/// Create-task request for the day page, or `null` for a blank description
#[wasm_bindgen(js_name = newTaskRequest)]
pub fn new_task_request(description: &str, day_date: Option<String>) -> Result<JsValue, JsValue> {
    let request = planner::new_task_request(description, day_date.as_deref()).map_err(to_js_error)?;
    serialize(&request, "Failed to serialize task request")
}

/// Create-task request for the backlog, or `null` for a blank description
#[wasm_bindgen(js_name = newBacklogTaskRequest)]
pub fn new_backlog_task_request(description: &str) -> Result<JsValue, JsValue> {
    serialize(&planner::new_backlog_task_request(description), "Failed to serialize task request")
}

/// Save request for an inline task edit, or `null` when the edit reverts
#[wasm_bindgen(js_name = taskEditRequest)]
pub fn task_edit_request(task_id: &str, old_text: &str, new_text: &str) -> Result<JsValue, JsValue> {
    serialize(
        &planner::task_edit_request(task_id, old_text, new_text),
        "Failed to serialize task request",
    )
}

#[wasm_bindgen(js_name = taskDeleteRequest)]
pub fn task_delete_request(task_id: &str) -> Result<JsValue, JsValue> {
    serialize(&planner::task_delete_request(task_id), "Failed to serialize task request")
}

/// Request for the category list used by the filter dropdowns
#[wasm_bindgen(js_name = categoriesRequest)]
pub fn categories_request() -> Result<JsValue, JsValue> {
    serialize(&planner::categories_request(), "Failed to serialize categories request")
}

/// `[value, label]` pairs for a filter dropdown, catch-all first
#[wasm_bindgen(js_name = categoryOptions)]
pub fn category_options(categories_js: JsValue) -> Result<JsValue, JsValue> {
    let categories: Vec<String> = deserialize(categories_js, "Invalid categories")?;
    serialize(&planner::category_options(&categories), "Failed to serialize category options")
}

/// Hide task cards outside the selected category; returns the hidden count
#[wasm_bindgen(js_name = applyCategoryFilter)]
pub fn apply_category_filter(selected: &str) -> Result<usize, JsValue> {
    let document = page_document()?;
    dom::kanban::apply_category_filter(&document, selected).map_err(to_js_error)
}
