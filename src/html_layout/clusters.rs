//! Overlap clusters
//!
//! A cluster is a connected component of the overlap graph: a run of events
//! chained together by pairwise overlaps. Events in different clusters never
//! share a moment in time, so each cluster can be packed and width-divided on
//! its own.

use crate::models::IntervalEvent;
use super::columns::{packing_sequence, PackingOrder};

/// Split events into overlap clusters.
///
/// Clusters are returned in order of their earliest start. Members of each
/// cluster are listed in `order`, so the result can be fed straight to
/// [`super::columns::pack_first_fit`].
pub fn overlap_clusters(events: &[IntervalEvent], order: PackingOrder) -> Vec<Vec<usize>> {
    let by_start = packing_sequence(events, PackingOrder::StartTime);

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut reach = i32::MIN;

    for index in by_start {
        let event = &events[index];
        match clusters.last_mut() {
            Some(current) if event.start < reach => {
                current.push(index);
                reach = reach.max(event.end);
            }
            _ => {
                clusters.push(vec![index]);
                reach = event.end;
            }
        }
    }

    if order == PackingOrder::InputOrder {
        for cluster in &mut clusters {
            cluster.sort_unstable();
        }
    }

    clusters
}
