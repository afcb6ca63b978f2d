//! Goal hierarchy levels
//!
//! Goals nest annual → quarterly → monthly → weekly → daily. Pages and parent
//! cards tell the add-goal modal which level a new child goal belongs to.

use serde::{Deserialize, Serialize};

/// Level of a goal in the planning hierarchy
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Annual,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Annual => "annual",
            GoalType::Quarterly => "quarterly",
            GoalType::Monthly => "monthly",
            GoalType::Weekly => "weekly",
            GoalType::Daily => "daily",
        }
    }

    /// Capitalized label used in modal titles ("Quarterly")
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Annual => "Annual",
            GoalType::Quarterly => "Quarterly",
            GoalType::Monthly => "Monthly",
            GoalType::Weekly => "Weekly",
            GoalType::Daily => "Daily",
        }
    }

    /// Level of a goal created under a parent of type (or on a page of type) `scope`.
    ///
    /// `scope` is either a goal type or a page type ("year", "day").
    /// Unknown scopes fall back to daily.
    pub fn child_of(scope: &str) -> GoalType {
        match scope {
            "year" => GoalType::Annual,
            "annual" => GoalType::Quarterly,
            "quarterly" => GoalType::Monthly,
            "monthly" => GoalType::Weekly,
            "weekly" | "day" => GoalType::Daily,
            _ => GoalType::Daily,
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
