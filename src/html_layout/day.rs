//! Day-level layout computation
//!
//! This module contains the main entry point for day-view layout: it takes the
//! timed events of one day and produces a DayDisplayList with a box for every
//! event, such that no two events in the same column overlap.

use crate::models::IntervalEvent;
use super::clusters::overlap_clusters;
use super::columns::{pack_first_fit, packing_sequence, PackingOrder};
use super::display_list::{DayDisplayList, RenderEvent};
use super::event_box::{compute_event_box, Placement};
use serde::{Serialize, Deserialize};

/// How the container width is divided between columns
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// Every event is divided by the column count of the whole day
    #[default]
    Global,
    /// Each overlap cluster is packed and divided on its own
    PerCluster,
}

/// Configuration for day-view layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum rendered height so short events stay clickable
    pub min_height: i32,

    /// Events rendered shorter than this get compact styling
    pub compact_threshold: i32,

    /// Inset (percentage points) applied to each side of an event box
    pub gutter_percent: f32,

    /// z-index applied to positioned events
    pub z_index: i32,

    /// Order in which events are packed
    pub packing_order: PackingOrder,

    /// Width division strategy
    pub width_mode: WidthMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_height: 30,
            compact_threshold: 50,
            gutter_percent: 1.0,
            z_index: 20,
            packing_order: PackingOrder::default(),
            width_mode: WidthMode::default(),
        }
    }
}

/// Layout engine for the day view
#[derive(Clone, Debug, Default)]
pub struct DayLayoutEngine {
    config: LayoutConfig,
}

impl DayLayoutEngine {
    /// Create a new layout engine
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute the layout for one day's events
    ///
    /// Events are returned in input order regardless of packing order.
    /// An empty slice yields an empty display list with zero columns.
    pub fn compute_layout(&self, events: &[IntervalEvent]) -> DayDisplayList {
        if events.is_empty() {
            return DayDisplayList::default();
        }

        let placements = match self.config.width_mode {
            WidthMode::Global => self.place_globally(events),
            WidthMode::PerCluster => self.place_per_cluster(events),
        };

        let column_count = placements
            .iter()
            .map(|placement| placement.total_columns)
            .max()
            .unwrap_or(0);

        let render_events: Vec<RenderEvent> = events
            .iter()
            .zip(placements)
            .enumerate()
            .map(|(index, (event, placement))| {
                compute_event_box(event, index, placement, &self.config)
            })
            .collect();

        log::debug!(
            "day layout: {} events in {} columns ({:?}, {:?})",
            render_events.len(),
            column_count,
            self.config.packing_order,
            self.config.width_mode
        );

        DayDisplayList {
            column_count,
            events: render_events,
        }
    }

    fn place_globally(&self, events: &[IntervalEvent]) -> Vec<Placement> {
        let sequence = packing_sequence(events, self.config.packing_order);
        let packed = pack_first_fit(events, sequence);
        let total_columns = packed.column_count();

        let mut placements = vec![Placement::default(); events.len()];
        for (column, members) in packed.columns.iter().enumerate() {
            for &index in members {
                placements[index] = Placement { column, total_columns };
            }
        }
        placements
    }

    fn place_per_cluster(&self, events: &[IntervalEvent]) -> Vec<Placement> {
        let mut placements = vec![Placement::default(); events.len()];

        for cluster in overlap_clusters(events, self.config.packing_order) {
            let packed = pack_first_fit(events, cluster);
            let total_columns = packed.column_count();

            for (column, members) in packed.columns.iter().enumerate() {
                for &index in members {
                    placements[index] = Placement { column, total_columns };
                }
            }
        }
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: &str, start: i32, end: i32) -> IntervalEvent {
        IntervalEvent::new(id, start, end)
    }

    #[test]
    fn test_global_mode_divides_by_day_total() {
        let engine = DayLayoutEngine::default();
        let events = vec![ev("a", 0, 60), ev("b", 30, 90), ev("c", 600, 660)];
        let layout = engine.compute_layout(&events);

        assert_eq!(layout.column_count, 2);
        let lone = layout.find("c").unwrap();
        assert_eq!(lone.total_columns, 2);
        assert!((lone.width_percent - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_per_cluster_mode_reclaims_width() {
        let config = LayoutConfig {
            width_mode: WidthMode::PerCluster,
            ..LayoutConfig::default()
        };
        let engine = DayLayoutEngine::new(config);
        let events = vec![ev("a", 0, 60), ev("b", 30, 90), ev("c", 600, 660)];
        let layout = engine.compute_layout(&events);

        assert_eq!(layout.column_count, 2);
        let lone = layout.find("c").unwrap();
        assert_eq!(lone.column, 0);
        assert_eq!(lone.total_columns, 1);
        assert!((lone.width_percent - 98.0).abs() < 1e-4);

        let b = layout.find("b").unwrap();
        assert_eq!(b.total_columns, 2);
        assert_eq!(b.column, 1);
    }

    #[test]
    fn test_results_follow_input_order() {
        let engine = DayLayoutEngine::default();
        let events = vec![ev("late", 600, 660), ev("early", 0, 60)];
        let layout = engine.compute_layout(&events);

        assert_eq!(layout.events[0].id, "late");
        assert_eq!(layout.events[0].index, 0);
        assert_eq!(layout.events[1].id, "early");
        assert_eq!(layout.events[1].index, 1);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"min_height": 45, "width_mode": "per_cluster"}"#).unwrap();
        assert_eq!(config.min_height, 45);
        assert_eq!(config.width_mode, WidthMode::PerCluster);
        assert_eq!(config.compact_threshold, 50);
        assert_eq!(config.packing_order, PackingOrder::StartTime);
    }
}
