//! DOM application layer
//!
//! Everything that touches `web_sys` lives here. Each pass reads its inputs
//! from the page, hands them to the pure planners, and writes the results back.
//! A page section that is not rendered makes its pass a no-op.

pub mod day_view;
pub mod kanban;
pub mod schedule;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};
use crate::error::{PlannerError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| PlannerError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| PlannerError::MissingElement("document".to_string()))
}

/// Elements of a NodeList that are HTML elements, in document order
pub fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document.query_selector_all(selector).map_err(PlannerError::js)?;
    Ok(html_elements(&list))
}

pub fn select_within(root: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = root.query_selector_all(selector).map_err(PlannerError::js)?;
    Ok(html_elements(&list))
}

/// Trimmed text content of an element
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default().trim().to_string()
}

/// Element children carrying `attribute`, in document order
pub fn children_with_attribute(parent: &Element, attribute: &str) -> Vec<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| child.has_attribute(attribute))
        .collect()
}
