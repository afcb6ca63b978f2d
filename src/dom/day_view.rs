//! Day-view event placement
//!
//! Server-rendered event blocks arrive as `.raw-event` elements inside
//! `#eventContainer` with `data-start`, `data-end` and `data-id`. This pass
//! lays them out and pins each one with inline absolute positioning.

use web_sys::{Document, Element, HtmlElement};
use crate::error::{PlannerError, Result};
use crate::html_layout::{DayDisplayList, DayLayoutEngine, LayoutConfig};
use crate::models::IntervalEvent;

pub const EVENT_CONTAINER_ID: &str = "eventContainer";
pub const RAW_EVENT_CLASS: &str = "raw-event";
pub const EVENT_ID_ATTR: &str = "data-event-id";

/// Leading integer of `raw`, the way markup offsets are written: optional
/// whitespace and sign, then digits. Trailing text ("480px", "480.5") is ignored.
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let digits_from = usize::from(trimmed.starts_with(|c: char| c == '+' || c == '-'));
    let digits_len = trimmed[digits_from..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_from + digits_len].parse().ok()
}

fn numeric_attribute(element: &Element, name: &str) -> Result<i32> {
    let raw = element.get_attribute(name).unwrap_or_default();
    parse_leading_int(&raw).ok_or_else(|| PlannerError::InvalidAttribute {
        name: name.to_string(),
        value: raw.clone(),
    })
}

/// Read one `.raw-event` element
pub fn parse_event_element(element: &Element) -> Result<IntervalEvent> {
    let start = numeric_attribute(element, "data-start")?;
    let end = numeric_attribute(element, "data-end")?;
    let id = element.get_attribute("data-id").unwrap_or_default();
    Ok(IntervalEvent::new(id, start, end))
}

/// Collect the raw events in `container`, skipping unreadable ones
pub fn read_raw_events(container: &Element) -> Result<(Vec<HtmlElement>, Vec<IntervalEvent>)> {
    let mut elements = Vec::new();
    let mut events = Vec::new();

    for element in super::select_within(container, &format!(".{}", RAW_EVENT_CLASS))? {
        match parse_event_element(&element) {
            Ok(event) => {
                elements.push(element);
                events.push(event);
            }
            Err(e) => log::warn!("skipping event block: {}", e),
        }
    }

    Ok((elements, events))
}

/// Write a computed layout back onto its elements.
///
/// `elements` must be parallel to the events the layout was computed from.
pub fn apply_layout(elements: &[HtmlElement], layout: &DayDisplayList) -> Result<()> {
    for render in &layout.events {
        let Some(element) = elements.get(render.index) else {
            log::warn!("no element for laid-out event {}", render.id);
            continue;
        };

        let style = element.style();
        for (property, value) in render.style_properties() {
            style.set_property(property, &value).map_err(PlannerError::js)?;
        }

        element
            .set_attribute(EVENT_ID_ATTR, &render.id)
            .map_err(PlannerError::js)?;
        element
            .class_list()
            .remove_1(RAW_EVENT_CLASS)
            .map_err(PlannerError::js)?;
    }
    Ok(())
}

/// Lay out the day view on `document`.
///
/// Returns `None` without touching the page when there is no event container.
pub fn init_day_calendar(document: &Document, config: &LayoutConfig) -> Result<Option<DayDisplayList>> {
    let Some(container) = document.get_element_by_id(EVENT_CONTAINER_ID) else {
        return Ok(None);
    };

    let (elements, events) = read_raw_events(&container)?;
    let layout = DayLayoutEngine::new(config.clone()).compute_layout(&events);

    if layout.is_empty() {
        return Ok(Some(layout));
    }

    apply_layout(&elements, &layout)?;
    log::info!(
        "day view: placed {} events in {} columns",
        layout.events.len(),
        layout.column_count
    );

    Ok(Some(layout))
}
