//! Time-slot arithmetic
//!
//! The day grid is made of half-hour `.time-slot-clickable` rows carrying
//! `data-hour` / `data-minutes`.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use crate::error::{PlannerError, Result};

/// First hour shown on the schedule grid
pub const SCHEDULE_START_HOUR: u32 = 5;

/// Pixels left above the target slot after auto-scrolling
pub const SCROLL_LEAD_PX: i32 = 150;

/// Delay before auto-scrolling, so the grid has laid out
pub const SCROLL_DELAY_MS: i32 = 400;

/// Latest end time an event window may carry
const LAST_MINUTE: &str = "23:59";

/// A wall-clock slot on the day grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotTime {
    pub hour: u32,
    pub minutes: u32,
}

impl SlotTime {
    pub fn new(hour: u32, minutes: u32) -> Self {
        Self { hour, minutes }
    }

    /// `HH:MM`, as accepted by `<input type="time">`
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minutes)
    }
}

/// Start/end pre-filled into the event modal
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventWindow {
    pub start: String,
    pub end: String,
}

/// Half-hour window starting at `slot`, aligned to the next half-hour mark
pub fn default_event_window(slot: SlotTime) -> EventWindow {
    let end = if slot.minutes >= 30 {
        SlotTime::new(slot.hour.saturating_add(1), 0)
    } else {
        SlotTime::new(slot.hour, 30)
    };

    let end = if end.hour >= 24 {
        LAST_MINUTE.to_string()
    } else {
        end.label()
    };

    EventWindow {
        start: slot.label(),
        end,
    }
}

/// Slot to scroll the schedule to when viewing today.
///
/// Rounds `now` up to the next half-hour mark, never earlier than the first
/// grid hour. Returns `None` for other days, or when the mark falls past the
/// end of the day.
pub fn auto_scroll_target(now: NaiveDateTime, page_date: NaiveDate) -> Option<SlotTime> {
    if now.date() != page_date {
        return None;
    }

    let (mut hour, minutes) = if now.minute() < 30 {
        (now.hour(), 30)
    } else {
        (now.hour() + 1, 0)
    };
    if hour < SCHEDULE_START_HOUR {
        hour = SCHEDULE_START_HOUR;
    }

    (hour < 24).then(|| SlotTime::new(hour, minutes))
}

/// Page date from the `data-year` / `data-month` / `data-day` attributes
pub fn page_date_from_parts(year: &str, month: &str, day: &str) -> Result<NaiveDate> {
    let invalid = || PlannerError::InvalidDate(format!("{}-{}-{}", year, month, day));
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// `data-minutes` is optional on whole-hour slots
pub fn parse_slot_minutes(raw: Option<&str>) -> u32 {
    raw.and_then(|m| m.trim().parse().ok()).unwrap_or(0)
}
