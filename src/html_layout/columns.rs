//! Greedy first-fit column packing
//!
//! Events are visited in a packing sequence and dropped into the first column
//! that has no overlapping member. The result is not a minimum-column packing
//! in general, but with a start-time sequence it matches interval-graph
//! colouring and uses exactly as many columns as the deepest overlap.

use serde::{Deserialize, Serialize};
use crate::models::IntervalEvent;

/// Order in which events are fed to the packer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackingOrder {
    /// Markup order, as delivered by the server-rendered page
    InputOrder,
    /// Ascending start time, ties broken by event id
    #[default]
    StartTime,
}

/// Partition of event indices into non-overlapping columns
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Indices into the event slice, per column, in placement order
    pub columns: Vec<Vec<usize>>,
}

impl ColumnAssignment {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column holding the event at `event_index`, if it was packed
    pub fn column_of(&self, event_index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|members| members.contains(&event_index))
    }
}

/// Indices of `events` in the order the packer should visit them
pub fn packing_sequence(events: &[IntervalEvent], order: PackingOrder) -> Vec<usize> {
    let mut sequence: Vec<usize> = (0..events.len()).collect();
    if order == PackingOrder::StartTime {
        // Stable: fully tied events keep markup order
        sequence.sort_by(|&a, &b| {
            let (ea, eb) = (&events[a], &events[b]);
            ea.start.cmp(&eb.start).then_with(|| ea.id.cmp(&eb.id))
        });
    }
    sequence
}

/// Pack the events at `sequence` into columns, first fit
pub fn pack_first_fit<I>(events: &[IntervalEvent], sequence: I) -> ColumnAssignment
where
    I: IntoIterator<Item = usize>,
{
    let mut columns: Vec<Vec<usize>> = Vec::new();

    for index in sequence {
        let event = &events[index];
        let slot = columns.iter().position(|members| {
            !members.iter().any(|&other| event.overlaps(&events[other]))
        });

        match slot {
            Some(column) => columns[column].push(index),
            None => columns.push(vec![index]),
        }
    }

    ColumnAssignment { columns }
}
