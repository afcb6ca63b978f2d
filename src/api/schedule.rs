//! Schedule exports

use chrono::{Local, NaiveDate};
use wasm_bindgen::prelude::*;
use crate::dom;
use crate::schedule::event_form::{self, EventForm};
use crate::schedule::import::{self, ImportResponse};
use crate::schedule::time_slots::{self, SlotTime};
use super::helpers::{deserialize, deserialize_or_default, page_document, serialize, to_js_error};

/// `{start, end}` times to pre-fill for a click on a slot
#[wasm_bindgen(js_name = defaultEventWindow)]
pub fn default_event_window(hour: u32, minutes: u32) -> Result<JsValue, JsValue> {
    let window = time_slots::default_event_window(SlotTime::new(hour, minutes));
    serialize(&window, "Failed to serialize event window")
}

/// Fill the event modal inputs for a clicked slot
#[wasm_bindgen(js_name = prefillEventForm)]
pub fn prefill_event_form(hour: u32, minutes: Option<u32>) -> Result<(), JsValue> {
    let document = page_document()?;
    let slot = SlotTime::new(hour, minutes.unwrap_or(0));
    dom::schedule::prefill_event_form(&document, slot).map_err(to_js_error)
}

/// Slot to scroll to for a page showing `page_date` (YYYY-MM-DD), or `null`
#[wasm_bindgen(js_name = autoScrollTarget)]
pub fn auto_scroll_target(page_date: &str) -> Result<JsValue, JsValue> {
    let date = NaiveDate::parse_from_str(page_date.trim(), "%Y-%m-%d")
        .map_err(|_| to_js_error(crate::error::PlannerError::InvalidDate(page_date.to_string())))?;
    let target = time_slots::auto_scroll_target(Local::now().naive_local(), date);
    serialize(&target, "Failed to serialize scroll target")
}

/// Scroll today's schedule grid to the upcoming half hour
#[wasm_bindgen(js_name = autoScrollToNow)]
pub fn auto_scroll_to_now() -> Result<bool, JsValue> {
    let window = dom::window().map_err(to_js_error)?;
    let document = page_document()?;
    dom::schedule::auto_scroll_to_now(&window, &document).map_err(to_js_error)
}

/// Restore and persist the schedule panel's collapsed state
#[wasm_bindgen(js_name = initScheduleCollapse)]
pub fn init_schedule_collapse() -> Result<(), JsValue> {
    let window = dom::window().map_err(to_js_error)?;
    let document = page_document()?;
    dom::schedule::init_schedule_collapse(&window, &document).map_err(to_js_error)
}

/// Save request for the event modal; `editingId` switches POST to PUT
#[wasm_bindgen(js_name = eventSaveRequest)]
pub fn event_save_request(form_js: JsValue, editing_id: Option<String>) -> Result<JsValue, JsValue> {
    let form: EventForm = deserialize(form_js, "Invalid event form")?;
    let request = event_form::event_save_request(&form, editing_id.as_deref());
    serialize(&request, "Failed to serialize request")
}

#[wasm_bindgen(js_name = eventFetchRequest)]
pub fn event_fetch_request(event_id: &str) -> Result<JsValue, JsValue> {
    serialize(&event_form::event_fetch_request(event_id), "Failed to serialize request")
}

#[wasm_bindgen(js_name = eventDeleteRequest)]
pub fn event_delete_request(event_id: &str) -> Result<JsValue, JsValue> {
    serialize(&event_form::event_delete_request(event_id), "Failed to serialize request")
}

#[wasm_bindgen(js_name = eventModalTitle)]
pub fn event_modal_title(editing: bool) -> String {
    event_form::event_modal_title(editing).to_string()
}

/// `{start, end}` for an add click in a month/week cell
#[wasm_bindgen(js_name = addAreaEventWindow)]
pub fn add_area_event_window() -> Result<JsValue, JsValue> {
    serialize(&event_form::add_area_window(), "Failed to serialize event window")
}

/// Import request for the day page, or `null` when the page has no date
#[wasm_bindgen(js_name = importCalendarRequest)]
pub fn import_calendar_request() -> Result<JsValue, JsValue> {
    let document = page_document()?;
    let request = dom::schedule::calendar_import_request(&document).map_err(to_js_error)?;
    serialize(&request, "Failed to serialize request")
}

#[wasm_bindgen(js_name = calendarSyncedMessage)]
pub fn calendar_synced_message(imported: u32) -> String {
    import::calendar_synced_message(u64::from(imported))
}

/// `{success, message, reload}` for an import response
#[wasm_bindgen(js_name = summarizeCalendarImport)]
pub fn summarize_calendar_import(status_ok: bool, status: u16, response_js: JsValue) -> Result<JsValue, JsValue> {
    let response: ImportResponse = deserialize_or_default(response_js, "Invalid import response")?;
    let outcome = import::summarize_import(status_ok, status, &response);
    serialize(&outcome, "Failed to serialize import outcome")
}
