// Day-view layout: packing invariants and geometry

#![cfg(not(target_arch = "wasm32"))]

use planner_wasm::html_layout::{pack_first_fit, packing_sequence, PackingOrder, WidthMode};
use planner_wasm::{DayLayoutEngine, IntervalEvent, LayoutConfig};
use proptest::prelude::*;

fn ev(id: &str, start: i32, end: i32) -> IntervalEvent {
    IntervalEvent::new(id, start, end)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_empty_day_produces_nothing() {
    let layout = DayLayoutEngine::default().compute_layout(&[]);
    assert_eq!(layout.column_count, 0);
    assert!(layout.is_empty());
}

#[test]
fn test_single_event_takes_full_width() {
    let layout = DayLayoutEngine::default().compute_layout(&[ev("1", 540, 600)]);
    let event = &layout.events[0];

    assert_eq!(layout.column_count, 1);
    assert_eq!((event.column, event.total_columns), (0, 1));
    assert!(approx(event.left_percent, 1.0));
    assert!(approx(event.width_percent, 98.0));
    assert_eq!(event.top, 540);
    assert_eq!(event.height, 60);
}

#[test]
fn test_back_to_back_events_share_column_zero() {
    let layout = DayLayoutEngine::default().compute_layout(&[ev("a", 0, 60), ev("b", 60, 120)]);

    assert_eq!(layout.column_count, 1);
    for event in &layout.events {
        assert_eq!(event.column, 0);
        assert!(approx(event.width_percent, 98.0));
    }
}

#[test]
fn test_overlapping_events_split_width() {
    let layout = DayLayoutEngine::default().compute_layout(&[ev("a", 0, 90), ev("b", 30, 60)]);
    let a = layout.find("a").unwrap();
    let b = layout.find("b").unwrap();

    assert_eq!(layout.column_count, 2);
    assert_eq!(a.column, 0);
    assert_eq!(b.column, 1);
    assert!(approx(a.left_percent, 1.0));
    assert!(approx(b.left_percent, 51.0));
    assert!(approx(a.width_percent, 48.0));
    assert!(approx(b.width_percent, 48.0));
}

#[test]
fn test_short_event_rendered_at_minimum_height() {
    let layout = DayLayoutEngine::default().compute_layout(&[ev("quick", 600, 610)]);
    let event = &layout.events[0];

    assert_eq!(event.height, 30);
    assert!(event.compact);
    let props = event.style_properties();
    assert!(props.contains(&("height", "30px".to_string())));
    assert!(props.contains(&("font-size", "0.75rem".to_string())));
}

#[test]
fn test_day_spanning_extreme_offsets_lay_out() {
    let events = [
        ev("x", -2_000_000_000, 2_000_000_000),
        ev("y", i32::MIN, i32::MAX),
    ];
    let layout = DayLayoutEngine::default().compute_layout(&events);

    assert_eq!(layout.column_count, 2);
    assert_eq!(layout.find("x").unwrap().height, i32::MAX);
    assert_eq!(layout.find("y").unwrap().height, i32::MAX);
}

#[test]
fn test_markup_order_packing_matches_legacy_behaviour() {
    let config = LayoutConfig {
        packing_order: PackingOrder::InputOrder,
        ..LayoutConfig::default()
    };
    let events = [ev("p1", 0, 10), ev("p2", 20, 30), ev("q", 5, 12), ev("r", 11, 21)];

    let legacy = DayLayoutEngine::new(config).compute_layout(&events);
    let sorted = DayLayoutEngine::default().compute_layout(&events);

    assert_eq!(legacy.column_count, 3);
    assert_eq!(legacy.find("r").unwrap().column, 2);
    assert_eq!(sorted.column_count, 2);
}

fn arb_events() -> impl Strategy<Value = Vec<IntervalEvent>> {
    prop::collection::vec((0i32..1440, -30i32..240), 0..40).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| IntervalEvent::new(i.to_string(), start, start + len))
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = LayoutConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(sorted, per_cluster)| LayoutConfig {
        packing_order: if sorted { PackingOrder::StartTime } else { PackingOrder::InputOrder },
        width_mode: if per_cluster { WidthMode::PerCluster } else { WidthMode::Global },
        ..LayoutConfig::default()
    })
}

proptest! {
    #[test]
    fn prop_every_event_packed_exactly_once(events in arb_events(), sorted in any::<bool>()) {
        let order = if sorted { PackingOrder::StartTime } else { PackingOrder::InputOrder };
        let packed = pack_first_fit(&events, packing_sequence(&events, order));

        let mut seen: Vec<usize> = packed.columns.iter().flatten().copied().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..events.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_no_overlap_within_a_column(events in arb_events(), config in arb_config()) {
        let layout = DayLayoutEngine::new(config).compute_layout(&events);
        prop_assert_eq!(layout.events.len(), events.len());

        for (i, a) in layout.events.iter().enumerate() {
            for b in &layout.events[i + 1..] {
                let same_column = a.column == b.column && a.total_columns == b.total_columns;
                if same_column && events[a.index].overlaps(&events[b.index]) {
                    prop_assert!(false, "{} and {} overlap in column {}", a.id, b.id, a.column);
                }
            }
        }
    }

    #[test]
    fn prop_overlapping_events_never_share_a_column(events in arb_events(), config in arb_config()) {
        let layout = DayLayoutEngine::new(config).compute_layout(&events);

        for (i, a) in layout.events.iter().enumerate() {
            for b in &layout.events[i + 1..] {
                if events[a.index].overlaps(&events[b.index]) {
                    prop_assert_ne!(a.column, b.column);
                }
            }
        }
    }

    #[test]
    fn prop_boxes_stay_inside_container(events in arb_events(), config in arb_config()) {
        let layout = DayLayoutEngine::new(config).compute_layout(&events);

        for event in &layout.events {
            prop_assert!(event.column < event.total_columns);
            prop_assert!(event.left_percent >= 0.0);
            prop_assert!(event.left_percent + event.width_percent <= 100.0 + 1e-3);
            prop_assert!(event.height >= 30);
            prop_assert_eq!(event.top, events[event.index].start);
        }
    }

    #[test]
    fn prop_start_time_packing_is_order_independent(events in arb_events()) {
        let mut reversed = events.clone();
        reversed.reverse();

        let engine = DayLayoutEngine::default();
        let forward = engine.compute_layout(&events);
        let backward = engine.compute_layout(&reversed);
        prop_assert_eq!(forward.column_count, backward.column_count);

        for event in &forward.events {
            let twin = backward.find(&event.id).unwrap();
            prop_assert_eq!(event.column, twin.column);
        }
    }
}
