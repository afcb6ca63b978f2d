//! Models module for the planner
//!
//! Data shapes shared by the layout engine, the kanban planner and the DOM
//! layer. Persistence and validation belong to the server.

pub mod event;
pub mod goal;
pub mod kanban;
pub mod request;

// Re-export commonly used types
pub use event::IntervalEvent;
pub use goal::GoalType;
pub use kanban::{BoardKind, BACKLOG_STATUS};
pub use request::{ApiRequest, HttpMethod};
