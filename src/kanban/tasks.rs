//! Task card create / edit / delete requests

use chrono::{Datelike, NaiveDate};
use serde_json::json;
use crate::error::{PlannerError, Result};
use crate::models::ApiRequest;

/// Outcome of leaving inline edit mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskEdit {
    /// Nothing to save; restore the displayed text
    Revert,
    /// Save the trimmed description
    Save(String),
}

pub fn resolve_task_edit(old_text: &str, new_text: &str) -> TaskEdit {
    let new_text = new_text.trim();
    if new_text.is_empty() || new_text == old_text.trim() {
        TaskEdit::Revert
    } else {
        TaskEdit::Save(new_text.to_string())
    }
}

/// `PUT /api/task/{id}` for an inline edit, or `None` when it reverts
pub fn task_edit_request(task_id: &str, old_text: &str, new_text: &str) -> Option<ApiRequest> {
    match resolve_task_edit(old_text, new_text) {
        TaskEdit::Revert => None,
        TaskEdit::Save(description) => Some(ApiRequest::put(
            format!("/api/task/{}", task_id),
            json!({ "description": description }),
        )),
    }
}

pub fn task_delete_request(task_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/api/task/{}", task_id))
}

/// Create a task on the day shown by the page.
///
/// `day_date` is the page's `YYYY-MM-DD` date; without one the server picks
/// the day. Blank descriptions produce no request.
pub fn new_task_request(description: &str, day_date: Option<&str>) -> Result<Option<ApiRequest>> {
    let description = description.trim();
    if description.is_empty() {
        return Ok(None);
    }

    let body = match day_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| PlannerError::InvalidDate(date.to_string()))?;
            json!({
                "description": description,
                "year": day.year(),
                "month": day.month(),
                "day": day.day(),
            })
        }
        None => json!({ "description": description }),
    };

    Ok(Some(ApiRequest::post("/api/task", Some(body))))
}

/// Create a task straight into the backlog
pub fn new_backlog_task_request(description: &str) -> Option<ApiRequest> {
    let description = description.trim();
    if description.is_empty() {
        return None;
    }
    Some(ApiRequest::post(
        "/api/task",
        Some(json!({ "description": description, "backlog": true })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    #[test]
    fn test_unchanged_or_blank_edit_reverts() {
        assert_eq!(resolve_task_edit("Buy milk", "  Buy milk "), TaskEdit::Revert);
        assert_eq!(resolve_task_edit("Buy milk", "   "), TaskEdit::Revert);
        assert!(task_edit_request("4", "Buy milk", "").is_none());
    }

    #[test]
    fn test_changed_edit_saves_trimmed() {
        assert_eq!(
            resolve_task_edit("Buy milk", " Buy oat milk "),
            TaskEdit::Save("Buy oat milk".to_string())
        );
        let request = task_edit_request("4", "Buy milk", "Buy oat milk").unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/api/task/4");
        assert_eq!(request.body, Some(json!({ "description": "Buy oat milk" })));
    }

    #[test]
    fn test_new_task_carries_page_date() {
        let request = new_task_request("Call mom", Some("2026-03-09")).unwrap().unwrap();
        assert_eq!(request.path, "/api/task");
        assert_eq!(
            request.body,
            Some(json!({ "description": "Call mom", "year": 2026, "month": 3, "day": 9 }))
        );
    }

    #[test]
    fn test_new_task_rejects_bad_date() {
        let err = new_task_request("Call mom", Some("03/09/2026")).unwrap_err();
        assert_eq!(err, PlannerError::InvalidDate("03/09/2026".to_string()));
    }

    #[test]
    fn test_blank_task_is_not_sent() {
        assert_eq!(new_task_request("  ", Some("2026-03-09")).unwrap(), None);
        assert!(new_backlog_task_request("").is_none());
    }

    #[test]
    fn test_backlog_task_flag() {
        let request = new_backlog_task_request("Someday").unwrap();
        assert_eq!(request.body, Some(json!({ "description": "Someday", "backlog": true })));
    }

    #[test]
    fn test_delete_request() {
        let request = task_delete_request("8");
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/api/task/8");
    }
}
