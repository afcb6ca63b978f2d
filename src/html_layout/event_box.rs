//! Per-event geometry
//!
//! Converts a packed event (column index out of a column total) into the
//! absolute box used for rendering. Widths are split evenly between columns;
//! each box is inset by the gutter on both sides.

use crate::models::IntervalEvent;
use super::day::LayoutConfig;
use super::display_list::RenderEvent;

/// Where the packer put an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub total_columns: usize,
}

/// Compute the render box for `event` at `placement`
pub fn compute_event_box(
    event: &IntervalEvent,
    index: usize,
    placement: Placement,
    config: &LayoutConfig,
) -> RenderEvent {
    let total = placement.total_columns.max(1) as f32;
    let column_width = 100.0 / total;
    let height = event.duration().max(config.min_height);

    RenderEvent {
        id: event.id.clone(),
        index,
        column: placement.column,
        total_columns: placement.total_columns,
        top: event.start,
        height,
        left_percent: placement.column as f32 * column_width + config.gutter_percent,
        width_percent: column_width - 2.0 * config.gutter_percent,
        z_index: config.z_index,
        compact: height < config.compact_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(column: usize, total_columns: usize) -> Placement {
        Placement { column, total_columns }
    }

    #[test]
    fn test_single_column_box() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("1", 60, 180);
        let render = compute_event_box(&event, 0, placement(0, 1), &config);

        assert_eq!(render.top, 60);
        assert_eq!(render.height, 120);
        assert!((render.left_percent - 1.0).abs() < 1e-4);
        assert!((render.width_percent - 98.0).abs() < 1e-4);
        assert!(!render.compact);
    }

    #[test]
    fn test_second_of_three_columns() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("1", 0, 60);
        let render = compute_event_box(&event, 0, placement(1, 3), &config);

        assert!((render.left_percent - (100.0 / 3.0 + 1.0)).abs() < 1e-3);
        assert!((render.width_percent - (100.0 / 3.0 - 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_short_event_floored_and_compact() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("1", 100, 110);
        let render = compute_event_box(&event, 0, placement(0, 1), &config);

        assert_eq!(render.top, 100);
        assert_eq!(render.height, config.min_height);
        assert!(render.compact);
    }

    #[test]
    fn test_negative_duration_keeps_true_start() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("1", 300, 240);
        let render = compute_event_box(&event, 0, placement(0, 1), &config);

        assert_eq!(render.top, 300);
        assert_eq!(render.height, config.min_height);
    }

    #[test]
    fn test_extreme_offsets_do_not_wrap() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("x", -2_000_000_000, 2_000_000_000);
        let render = compute_event_box(&event, 0, placement(0, 1), &config);

        assert_eq!(render.top, -2_000_000_000);
        assert_eq!(render.height, i32::MAX);
        assert!(!render.compact);
    }

    #[test]
    fn test_compact_threshold_is_exclusive() {
        let config = LayoutConfig::default();
        let event = IntervalEvent::new("1", 0, config.compact_threshold);
        let render = compute_event_box(&event, 0, placement(0, 1), &config);
        assert!(!render.compact);
    }
}
