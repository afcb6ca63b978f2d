//! Drop planning for sortable kanban columns
//!
//! A drop produces up to three kinds of request, in this order:
//! 1. a backlog task dragged onto the board is promoted to today (and the page
//!    reloads once that completes), or else the item's status is set to the
//!    destination column's status;
//! 2. every item in the destination column is re-ranked by its position.

use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::models::{kanban::is_backlog, ApiRequest, BoardKind};

/// What Sortable reports when a drag ends
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DropEvent {
    /// `data-item-id` of the dragged card
    pub item_id: String,

    /// `data-status` of the column the card came from
    pub from_status: String,

    /// `data-status` of the column the card landed in
    pub to_status: String,

    /// Board of the destination column
    #[serde(default)]
    pub board: BoardKind,

    pub old_index: usize,
    pub new_index: usize,

    /// Whether source and destination are the same column element
    pub same_column: bool,

    /// Item ids of the destination column after the drop, top to bottom
    #[serde(default)]
    pub column_item_ids: Vec<String>,
}

/// Requests to issue for a drop
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DropPlan {
    /// Requests in issue order; ranking requests are fire-and-forget
    pub requests: Vec<ApiRequest>,

    /// Reload the page once the first request completes
    pub reload: bool,

    /// Number of cards now in the destination column
    pub badge_count: usize,
}

impl DropPlan {
    pub fn is_noop(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Plan the server calls for a finished drag
pub fn plan_drop(drop: &DropEvent) -> DropPlan {
    if drop.same_column && drop.old_index == drop.new_index {
        return DropPlan::default();
    }

    let resource = drop.board.resource();
    let mut requests = Vec::with_capacity(drop.column_item_ids.len() + 1);
    let mut reload = false;

    let promotes_backlog_task = drop.board == BoardKind::Tasks
        && is_backlog(&drop.from_status)
        && !is_backlog(&drop.to_status);

    if promotes_backlog_task {
        requests.push(ApiRequest::post(format!("/api/task/{}/today", drop.item_id), None));
        reload = true;
    } else {
        requests.push(ApiRequest::post(
            format!("/api/{}/{}/status", resource, drop.item_id),
            Some(json!({ "status": drop.to_status })),
        ));
    }

    for (rank, id) in drop.column_item_ids.iter().enumerate() {
        requests.push(ApiRequest::post(
            format!("/api/{}/{}/rank", resource, id),
            Some(json!({ "rank": rank })),
        ));
    }

    log::debug!(
        "drop {} {} -> {}: {} requests{}",
        drop.item_id,
        drop.from_status,
        drop.to_status,
        requests.len(),
        if reload { " (reload)" } else { "" }
    );

    DropPlan {
        requests,
        reload,
        badge_count: drop.column_item_ids.len(),
    }
}
