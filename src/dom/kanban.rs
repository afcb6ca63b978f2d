//! Kanban board DOM passes

use web_sys::{Document, Element};
use crate::error::{PlannerError, Result};
use crate::kanban::is_hidden_by_filter;
use crate::models::BoardKind;

pub const ITEM_ID_ATTR: &str = "data-item-id";

/// Item ids of a column, top to bottom
pub fn column_item_ids(column: &Element) -> Vec<String> {
    super::children_with_attribute(column, ITEM_ID_ATTR)
        .iter()
        .filter_map(|item| item.get_attribute(ITEM_ID_ATTR))
        .collect()
}

/// Set every column badge on `board` to its card count
pub fn refresh_column_badges(document: &Document, board: BoardKind) -> Result<()> {
    let selector = format!(".kanban-column[data-type=\"{}\"]", board.data_type());

    for column in super::select_all(document, &selector)? {
        let count = column_item_ids(&column).len();
        let badge = column
            .closest(".card")
            .map_err(PlannerError::js)?
            .map(|card| card.query_selector(".badge"))
            .transpose()
            .map_err(PlannerError::js)?
            .flatten();

        if let Some(badge) = badge {
            badge.set_text_content(Some(&count.to_string()));
        }
    }
    Ok(())
}

/// Hide every task card outside `selected`; returns how many are hidden
pub fn apply_category_filter(document: &Document, selected: &str) -> Result<usize> {
    let mut hidden = 0;

    for card in super::select_all(document, ".kanban-item[data-item-id]")? {
        let category = card
            .query_selector(".task-category-badge")
            .map_err(PlannerError::js)?
            .map(|badge| super::text_of(&badge))
            .unwrap_or_default();

        let hide = is_hidden_by_filter(selected, &category);
        card.class_list()
            .toggle_with_force("hidden", hide)
            .map_err(PlannerError::js)?;
        if hide {
            hidden += 1;
        }
    }

    log::debug!("category filter {:?}: {} cards hidden", selected, hidden);
    Ok(hidden)
}
