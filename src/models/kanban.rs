//! Kanban board vocabulary
//!
//! Columns are identified by the `data-status` attribute of the column element
//! and boards by `data-type`. Status names are owned by the server, so they are
//! carried as strings; only `backlog` has client-side meaning.

use serde::{Deserialize, Serialize};

/// Status name of the backlog column
pub const BACKLOG_STATUS: &str = "backlog";

/// Which board a column belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    Tasks,
    #[default]
    Goals,
}

impl BoardKind {
    /// Parse a column's `data-type`; anything but "tasks" is a goal board
    pub fn from_data_type(data_type: Option<&str>) -> Self {
        match data_type {
            Some("tasks") => BoardKind::Tasks,
            _ => BoardKind::Goals,
        }
    }

    pub fn data_type(&self) -> &'static str {
        match self {
            BoardKind::Tasks => "tasks",
            BoardKind::Goals => "goals",
        }
    }

    /// REST collection segment for items on this board
    pub fn resource(&self) -> &'static str {
        match self {
            BoardKind::Tasks => "task",
            BoardKind::Goals => "goals",
        }
    }
}

pub fn is_backlog(status: &str) -> bool {
    status == BACKLOG_STATUS
}
