//! Event modal requests
//!
//! One modal adds and edits calendar events. Day-view blocks and month/week
//! badges carry `data-event-id`; clicking one loads the event for editing.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::models::ApiRequest;
use super::time_slots::EventWindow;

/// Start time pre-filled when adding from a month/week cell
pub const ADD_AREA_START: &str = "09:00";

/// End time pre-filled when adding from a month/week cell
pub const ADD_AREA_END: &str = "10:00";

/// Raw values of the event modal inputs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EventForm {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub all_day: bool,
    pub start_time: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub recurrence_rule: String,
}

impl EventForm {
    /// JSON body sent on save.
    ///
    /// All-day events carry no times; non-recurring events carry no rule.
    pub fn payload(&self) -> Value {
        let time = |value: &str| {
            if self.all_day { Value::Null } else { Value::String(value.to_string()) }
        };
        let rule = if self.is_recurring {
            Value::String(self.recurrence_rule.clone())
        } else {
            Value::Null
        };

        json!({
            "title": self.title.trim(),
            "start_date": self.start_date,
            "end_date": self.end_date,
            "all_day": self.all_day,
            "start_time": time(&self.start_time),
            "end_time": time(&self.end_time),
            "is_recurring": self.is_recurring,
            "recurrence_rule": rule,
        })
    }
}

/// `PUT /api/event/{id}` when editing, `POST /api/event` otherwise
pub fn event_save_request(form: &EventForm, editing_id: Option<&str>) -> ApiRequest {
    match editing_id.filter(|id| !id.is_empty()) {
        Some(id) => ApiRequest::put(format!("/api/event/{}", id), form.payload()),
        None => ApiRequest::post("/api/event", Some(form.payload())),
    }
}

/// Load an event into the modal for editing
pub fn event_fetch_request(event_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/api/event/{}", event_id))
}

pub fn event_delete_request(event_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/api/event/{}", event_id))
}

pub fn event_modal_title(editing: bool) -> &'static str {
    if editing { "Edit Event" } else { "Add Event" }
}

/// Window pre-filled when adding from a month/week cell
pub fn add_area_window() -> EventWindow {
    EventWindow {
        start: ADD_AREA_START.to_string(),
        end: ADD_AREA_END.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    fn timed_form() -> EventForm {
        EventForm {
            title: " Dentist ".to_string(),
            start_date: "2026-03-09".to_string(),
            end_date: "2026-03-09".to_string(),
            start_time: "09:30".to_string(),
            end_time: "10:00".to_string(),
            recurrence_rule: "FREQ=WEEKLY".to_string(),
            ..EventForm::default()
        }
    }

    #[test]
    fn test_new_event_posts_full_payload() {
        let request = event_save_request(&timed_form(), None);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/event");
        assert_eq!(
            request.body,
            Some(json!({
                "title": "Dentist",
                "start_date": "2026-03-09",
                "end_date": "2026-03-09",
                "all_day": false,
                "start_time": "09:30",
                "end_time": "10:00",
                "is_recurring": false,
                "recurrence_rule": null,
            }))
        );
    }

    #[test]
    fn test_editing_puts_to_event() {
        let request = event_save_request(&timed_form(), Some("42"));
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/api/event/42");

        let request = event_save_request(&timed_form(), Some(""));
        assert_eq!(request.method, HttpMethod::Post);
    }

    #[test]
    fn test_all_day_drops_times() {
        let form = EventForm { all_day: true, ..timed_form() };
        let body = form.payload();
        assert_eq!(body["start_time"], Value::Null);
        assert_eq!(body["end_time"], Value::Null);
        assert_eq!(body["all_day"], json!(true));
    }

    #[test]
    fn test_recurring_keeps_rule() {
        let form = EventForm { is_recurring: true, ..timed_form() };
        assert_eq!(form.payload()["recurrence_rule"], json!("FREQ=WEEKLY"));
    }

    #[test]
    fn test_fetch_and_delete_paths() {
        let fetch = event_fetch_request("7");
        assert_eq!((fetch.method, fetch.path.as_str()), (HttpMethod::Get, "/api/event/7"));

        let delete = event_delete_request("7");
        assert_eq!((delete.method, delete.path.as_str()), (HttpMethod::Delete, "/api/event/7"));
    }

    #[test]
    fn test_add_area_window() {
        let window = add_area_window();
        assert_eq!(window.start, "09:00");
        assert_eq!(window.end, "10:00");
        assert_eq!(event_modal_title(false), "Add Event");
        assert_eq!(event_modal_title(true), "Edit Event");
    }

    #[test]
    fn test_partial_form_deserializes() {
        let form: EventForm = serde_json::from_str(r#"{"title":"Gym","all_day":true}"#).unwrap();
        assert_eq!(form.title, "Gym");
        assert!(form.all_day);
        assert!(form.start_time.is_empty());
    }
}
