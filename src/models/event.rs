//! Calendar interval events
//!
//! An `IntervalEvent` is the layout-facing view of a calendar event: an
//! identifier plus a start/end offset from the top of the day. Offsets are
//! minutes, or pixels already scaled by the caller.

use serde::{Deserialize, Serialize};

/// One timed event on a single day
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IntervalEvent {
    /// Server-side event identifier (used for click-to-edit lookups)
    pub id: String,

    /// Offset of the event start from the top of the day
    pub start: i32,

    /// Offset of the event end from the top of the day
    pub end: i32,
}

impl IntervalEvent {
    pub fn new(id: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Raw duration; zero or negative for degenerate events, saturating at
    /// the `i32` bounds
    pub fn duration(&self) -> i32 {
        self.end.saturating_sub(self.start)
    }

    /// Half-open overlap test: touching intervals do not overlap
    pub fn overlaps(&self, other: &IntervalEvent) -> bool {
        self.start < other.end && self.end > other.start
    }
}
