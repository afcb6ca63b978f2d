//! Goal modal routing
//!
//! The unified goal modal serves three flows: editing an existing goal,
//! adding a subgoal under a parent, and adding a top-level goal.

use serde_json::{Map, Value};
use crate::models::{ApiRequest, GoalType};

/// Goal level for the add-goal modal.
///
/// The parent card's type wins over the page type; empty values are ignored.
pub fn child_goal_type(parent_type: Option<&str>, page_type: Option<&str>) -> GoalType {
    let scope = parent_type
        .filter(|s| !s.is_empty())
        .or(page_type.filter(|s| !s.is_empty()))
        .unwrap_or_default();
    GoalType::child_of(scope)
}

pub fn add_goal_modal_title(goal_type: GoalType) -> String {
    format!("Add {} Goal", goal_type.label())
}

fn non_empty<'a>(form: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    form.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Build the save request for a submitted goal form.
///
/// `form` holds the raw form entries (all strings). The `completed` checkbox is
/// converted to a boolean before sending.
pub fn goal_save_request(form: &Map<String, Value>) -> ApiRequest {
    let mut body = form.clone();
    let completed = form.get("completed").and_then(Value::as_str) == Some("on");
    body.insert("completed".to_string(), Value::Bool(completed));
    let body = Value::Object(body);

    if let Some(goal_id) = non_empty(form, "goal_id") {
        ApiRequest::put(format!("/api/goals/{}", goal_id), body)
    } else if let Some(parent_id) = non_empty(form, "parent_id") {
        ApiRequest::post(format!("/api/goals/{}/subgoal", parent_id), Some(body))
    } else {
        ApiRequest::post("/goals", Some(body))
    }
}
