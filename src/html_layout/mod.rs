//! HTML Layout Engine
//!
//! This module computes the day-view layout for DOM rendering, generating a
//! DayDisplayList with every position and size the DOM layer needs to place
//! calendar events side by side.

pub mod columns;
pub mod clusters;
pub mod event_box;
pub mod day;
pub mod display_list;

pub use columns::{pack_first_fit, packing_sequence, ColumnAssignment, PackingOrder};
pub use clusters::overlap_clusters;
pub use day::{DayLayoutEngine, LayoutConfig, WidthMode};
pub use display_list::{DayDisplayList, RenderEvent};
