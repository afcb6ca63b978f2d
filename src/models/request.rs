//! REST request descriptions
//!
//! Planning code never touches the network. It returns `ApiRequest`s, and the
//! page glue turns them into `fetch` calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One request against the planner REST API
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,

    /// Absolute path, e.g. `/api/task/12/rank`
    pub path: String,

    /// JSON body; `None` for bodiless requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), body }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Delete, path: path.into(), body: None }
    }
}
