//! Calendar import for the day page
//!
//! The import button asks the server to pull external calendar entries for
//! the page's day, then reports how many arrived and reloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::ApiRequest;
use super::time_slots::page_date_from_parts;

/// Delay before reloading after a successful import
pub const RELOAD_DELAY_MS: i32 = 1800;

const FALLBACK_FAILURE: &str = "Import failed";

pub fn import_calendar_request(day: NaiveDate) -> ApiRequest {
    ApiRequest::get(format!("/api/import-calendar/{}", day.format("%Y%m%d")))
}

/// Import request from the `#dayDateData` year/month/day attributes
pub fn import_calendar_request_from_parts(year: &str, month: &str, day: &str) -> Result<ApiRequest> {
    Ok(import_calendar_request(page_date_from_parts(year, month, day)?))
}

pub fn calendar_synced_message(imported: u64) -> String {
    let plural = if imported == 1 { "" } else { "s" };
    format!("Calendar synced! {} event{} imported", imported, plural)
}

/// JSON body returned by the import endpoint
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ImportResponse {
    pub success: bool,
    pub imported: Option<u64>,
    pub error: Option<String>,
}

/// What to show the user after an import
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ImportOutcome {
    pub success: bool,
    pub message: String,
    /// Reload the page after [`RELOAD_DELAY_MS`]
    pub reload: bool,
}

/// Turn the HTTP status and response body into a toast message
pub fn summarize_import(status_ok: bool, status: u16, response: &ImportResponse) -> ImportOutcome {
    let failure = |fallback: String| ImportOutcome {
        success: false,
        message: response.error.clone().filter(|e| !e.is_empty()).unwrap_or(fallback),
        reload: false,
    };

    if !status_ok {
        return failure(format!("Server error: {}", status));
    }
    if !response.success {
        return failure(FALLBACK_FAILURE.to_string());
    }

    ImportOutcome {
        success: true,
        message: calendar_synced_message(response.imported.unwrap_or(0)),
        reload: true,
    }
}
