//! Persisted schedule collapse state

use serde::{Deserialize, Serialize};

/// localStorage key holding `"true"` when the schedule is collapsed
pub const SCHEDULE_COLLAPSED_KEY: &str = "scheduleCollapsed";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollapseState {
    #[default]
    Expanded,
    Collapsed,
}

impl CollapseState {
    /// Only an explicit `"true"` collapses; missing or anything else is open
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => CollapseState::Collapsed,
            _ => CollapseState::Expanded,
        }
    }

    pub fn stored_value(&self) -> &'static str {
        match self {
            CollapseState::Collapsed => "true",
            CollapseState::Expanded => "false",
        }
    }

    pub fn is_expanded(&self) -> bool {
        *self == CollapseState::Expanded
    }

    /// Value for the toggle button's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_expanded() {
        assert_eq!(CollapseState::from_stored(None), CollapseState::Expanded);
        assert_eq!(CollapseState::from_stored(Some("false")), CollapseState::Expanded);
        assert_eq!(CollapseState::from_stored(Some("yes")), CollapseState::Expanded);
    }

    #[test]
    fn test_stored_true_collapses() {
        let state = CollapseState::from_stored(Some("true"));
        assert_eq!(state, CollapseState::Collapsed);
        assert_eq!(state.aria_expanded(), "false");
        assert_eq!(state.stored_value(), "true");
    }
}
