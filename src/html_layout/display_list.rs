//! Display List for Day-View Rendering
//!
//! This module defines the output structure returned from the day layout engine.
//! The DayDisplayList contains every pre-calculated position and size needed to
//! place event elements in the schedule container without further layout work.

use serde::{Serialize, Deserialize};

/// Top-level display list for one day's schedule
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DayDisplayList {
    /// Widest column count used by any event (total columns in global mode)
    pub column_count: usize,

    /// One entry per input event, in input order
    pub events: Vec<RenderEvent>,
}

impl DayDisplayList {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up a positioned event by its id
    pub fn find(&self, id: &str) -> Option<&RenderEvent> {
        self.events.iter().find(|event| event.id == id)
    }
}

/// A single positioned event
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderEvent {
    /// Event identifier, written back as `data-event-id`
    pub id: String,

    /// Position of the event in the input sequence
    pub index: usize,

    /// Column the event was packed into
    pub column: usize,

    /// Number of columns sharing the width this event is divided over
    pub total_columns: usize,

    /// Top edge in day units (pixels)
    pub top: i32,

    /// Rendered height, floored to the configured minimum
    pub height: i32,

    /// Left edge as a percentage of the container width (gutter included)
    pub left_percent: f32,

    /// Width as a percentage of the container width (gutters removed)
    pub width_percent: f32,

    /// Stacking order above the time-slot grid
    pub z_index: i32,

    /// Short event: render with reduced padding and font size
    pub compact: bool,
}

/// Inline padding applied to compact events
pub const COMPACT_PADDING: &str = "3px 8px";

/// Inline font size applied to compact events
pub const COMPACT_FONT_SIZE: &str = "0.75rem";

impl RenderEvent {
    /// Inline CSS properties for this event, in application order
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("position", "absolute".to_string()),
            ("top", format!("{}px", self.top)),
            ("height", format!("{}px", self.height)),
            ("left", format!("{}%", self.left_percent)),
            ("width", format!("{}%", self.width_percent)),
            ("z-index", self.z_index.to_string()),
        ];

        if self.compact {
            props.push(("padding", COMPACT_PADDING.to_string()));
            props.push(("font-size", COMPACT_FONT_SIZE.to_string()));
        }

        props
    }
}
