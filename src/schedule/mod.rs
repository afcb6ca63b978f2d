//! Day schedule helpers
//!
//! Time-slot arithmetic for the day page (pre-filling the event modal,
//! picking the slot to scroll to), event modal and calendar import requests,
//! and the persisted collapse preference.

pub mod event_form;
pub mod import;
pub mod preferences;
pub mod time_slots;

pub use event_form::{
    add_area_window, event_delete_request, event_fetch_request, event_save_request, EventForm,
};
pub use import::{calendar_synced_message, import_calendar_request, summarize_import, ImportResponse};
pub use preferences::{CollapseState, SCHEDULE_COLLAPSED_KEY};
pub use time_slots::{auto_scroll_target, default_event_window, EventWindow, SlotTime};
