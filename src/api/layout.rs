//! Day-view layout exports

use wasm_bindgen::prelude::*;
use crate::dom;
use crate::html_layout::{DayLayoutEngine, LayoutConfig};
use crate::models::IntervalEvent;
use super::helpers::{deserialize, deserialize_or_default, page_document, serialize, to_js_error};

/// Compute the day layout for an array of `{id, start, end}` events
///
/// # Parameters
/// - `events_js`: array of interval events
/// - `config_js`: partial `LayoutConfig`, or `undefined` for defaults
///
/// # Returns
/// A `DayDisplayList` object
#[wasm_bindgen(js_name = layoutDayEvents)]
pub fn layout_day_events(events_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let events: Vec<IntervalEvent> = deserialize(events_js, "Invalid events")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Invalid layout config")?;

    let layout = DayLayoutEngine::new(config).compute_layout(&events);
    serialize(&layout, "Failed to serialize day layout")
}

/// Position the `.raw-event` blocks of the current page's day view
///
/// Returns the applied `DayDisplayList`, or `null` when the page has no day view.
#[wasm_bindgen(js_name = initDayCalendar)]
pub fn init_day_calendar(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: LayoutConfig = deserialize_or_default(config_js, "Invalid layout config")?;
    let document = page_document()?;

    match dom::day_view::init_day_calendar(&document, &config).map_err(to_js_error)? {
        Some(layout) => serialize(&layout, "Failed to serialize day layout"),
        None => Ok(JsValue::NULL),
    }
}
