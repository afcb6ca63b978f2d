//! Error types for the planner module
//!
//! DOM passes treat a missing page section as a silent no-op, so these errors
//! only surface from explicit API calls or from failed JS interop.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlannerError {
    /// A required element is not on the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A data-* attribute could not be parsed
    #[error("Invalid attribute {name}={value:?}")]
    InvalidAttribute { name: String, value: String },

    /// A date string was not YYYY-MM-DD
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A DOM or JS call threw
    #[error("JS error: {0}")]
    Js(String),

    /// A value could not cross the JS boundary
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PlannerError {
    pub fn js(value: JsValue) -> Self {
        PlannerError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<PlannerError> for JsValue {
    fn from(err: PlannerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
