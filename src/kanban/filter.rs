//! Task category filter

use crate::models::ApiRequest;

/// Label of the catch-all option at the top of every filter dropdown
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

pub fn categories_request() -> ApiRequest {
    ApiRequest::get("/api/tasks/categories")
}

/// `(value, label)` pairs for a filter dropdown, catch-all first
pub fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((String::new(), ALL_CATEGORIES_LABEL.to_string()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

/// A card is hidden when a category is selected and the card's differs
pub fn is_hidden_by_filter(selected: &str, card_category: &str) -> bool {
    !selected.is_empty() && card_category.trim() != selected
}
