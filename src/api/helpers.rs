//! Shared helpers for WASM API operations
//!
//! This module contains the common patterns for crossing the JS boundary:
//! serialization, deserialization and error conversion, with failures logged
//! to the browser console.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::error::PlannerError;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = PlannerError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        JsValue::from(err)
    })
}

/// Deserialize an optional argument; `undefined`/`null` yield the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Maps are emitted as plain objects so request bodies can go straight to
/// `JSON.stringify`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let err = PlannerError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        JsValue::from(err)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log a planner error and convert it for JavaScript
pub fn to_js_error(err: PlannerError) -> JsValue {
    log::error!("{}", err);
    JsValue::from(err)
}

/// Current page document, as a JS error when there is none
pub fn page_document() -> Result<web_sys::Document, JsValue> {
    crate::dom::document().map_err(to_js_error)
}
