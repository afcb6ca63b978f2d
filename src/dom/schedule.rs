//! Day schedule DOM passes

use chrono::Local;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions, Storage, Window};
use crate::error::{PlannerError, Result};
use crate::models::ApiRequest;
use crate::schedule::import::import_calendar_request_from_parts;
use crate::schedule::time_slots::{
    auto_scroll_target, default_event_window, page_date_from_parts, SlotTime, SCROLL_DELAY_MS,
    SCROLL_LEAD_PX,
};
use crate::schedule::{CollapseState, SCHEDULE_COLLAPSED_KEY};

pub const SCHEDULE_COLLAPSE_ID: &str = "scheduleCollapse";
pub const SCHEDULE_GRID_ID: &str = "scheduleGrid";
pub const DAY_DATE_ID: &str = "dayDateData";

fn local_storage(window: &Window) -> Option<Storage> {
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {:?}", e);
            None
        }
    }
}

/// Reflect `state` on the collapse panel and its toggle button
pub fn apply_collapse_state(collapse: &Element, button: &Element, state: CollapseState) -> Result<()> {
    let expanded = state.is_expanded();
    collapse
        .class_list()
        .toggle_with_force("show", expanded)
        .map_err(PlannerError::js)?;
    button
        .class_list()
        .toggle_with_force("collapsed", !expanded)
        .map_err(PlannerError::js)?;
    button
        .set_attribute("aria-expanded", state.aria_expanded())
        .map_err(PlannerError::js)?;
    Ok(())
}

fn remember_on(collapse: &Element, event: &str, state: CollapseState, storage: Storage) -> Result<()> {
    let listener = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = storage.set_item(SCHEDULE_COLLAPSED_KEY, state.stored_value()) {
            log::error!("failed to persist schedule state: {:?}", e);
        }
    });
    collapse
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(PlannerError::js)?;
    // Lives as long as the page
    listener.forget();
    Ok(())
}

/// Restore the schedule's open/closed state and keep it persisted
pub fn init_schedule_collapse(window: &Window, document: &Document) -> Result<()> {
    let Some(collapse) = document.get_element_by_id(SCHEDULE_COLLAPSE_ID) else {
        return Ok(());
    };
    let selector = format!("[data-bs-target=\"#{}\"]", SCHEDULE_COLLAPSE_ID);
    let Some(button) = document.query_selector(&selector).map_err(PlannerError::js)? else {
        return Ok(());
    };

    let storage = local_storage(window);
    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(SCHEDULE_COLLAPSED_KEY).ok().flatten());
    let state = CollapseState::from_stored(stored.as_deref());
    apply_collapse_state(&collapse, &button, state)?;

    if let Some(storage) = storage {
        remember_on(&collapse, "shown.bs.collapse", CollapseState::Expanded, storage.clone())?;
        remember_on(&collapse, "hidden.bs.collapse", CollapseState::Collapsed, storage)?;
    }
    Ok(())
}

fn set_input(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

/// Fill the event modal for a click on the slot at `slot`
pub fn prefill_event_form(document: &Document, slot: SlotTime) -> Result<()> {
    let day_date = document
        .get_element_by_id(DAY_DATE_ID)
        .map(|el| super::text_of(&el))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let window = default_event_window(slot);
    set_input(document, "startTime", &window.start);
    set_input(document, "endTime", &window.end);
    set_input(document, "startDate", &day_date);
    set_input(document, "endDate", &day_date);

    if let Some(title) = document
        .get_element_by_id("eventTitle")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        title.focus().map_err(PlannerError::js)?;
    }
    Ok(())
}

fn date_attribute(day_data: &Element, name: &str) -> String {
    day_data.get_attribute(name).unwrap_or_default()
}

/// Calendar import request for the page's day.
///
/// `None` when the page has no `#dayDateData`.
pub fn calendar_import_request(document: &Document) -> Result<Option<ApiRequest>> {
    let Some(day_data) = document.get_element_by_id(DAY_DATE_ID) else {
        log::warn!("calendar import: #{} not found", DAY_DATE_ID);
        return Ok(None);
    };
    import_calendar_request_from_parts(
        &date_attribute(&day_data, "data-year"),
        &date_attribute(&day_data, "data-month"),
        &date_attribute(&day_data, "data-day"),
    )
    .map(Some)
}

/// Scroll today's schedule so the upcoming half hour is in view.
///
/// Returns whether a scroll was scheduled.
pub fn auto_scroll_to_now(window: &Window, document: &Document) -> Result<bool> {
    let (Some(grid), Some(day_data)) = (
        document.get_element_by_id(SCHEDULE_GRID_ID),
        document.get_element_by_id(DAY_DATE_ID),
    ) else {
        return Ok(false);
    };

    let page_date = match page_date_from_parts(
        &date_attribute(&day_data, "data-year"),
        &date_attribute(&day_data, "data-month"),
        &date_attribute(&day_data, "data-day"),
    ) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("auto-scroll skipped: {}", e);
            return Ok(false);
        }
    };

    let Some(target) = auto_scroll_target(Local::now().naive_local(), page_date) else {
        return Ok(false);
    };

    let selector = format!(
        ".time-slot-clickable[data-hour=\"{}\"][data-minutes=\"{}\"]",
        target.hour, target.minutes
    );
    let Some(slot) = document
        .query_selector(&selector)
        .map_err(PlannerError::js)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };

    let top = slot.offset_top() - SCROLL_LEAD_PX;
    let scroll = Closure::once_into_js(move || {
        let options = ScrollToOptions::new();
        options.set_top(top as f64);
        options.set_behavior(ScrollBehavior::Smooth);
        grid.scroll_to_with_scroll_to_options(&options);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            scroll.unchecked_ref::<js_sys::Function>(),
            SCROLL_DELAY_MS,
        )
        .map_err(PlannerError::js)?;

    log::debug!("auto-scroll to {} ({}px)", target.label(), top);
    Ok(true)
}
