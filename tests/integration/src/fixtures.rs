//! Test fixtures
//!
//! Typed views of the API's JSON bodies.

use serde::Deserialize;

/// Event type body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventTypeBody {
    pub id: i64,
    pub description: String,
}

/// Event body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: i64,
    pub type_id: i64,
    pub description: String,
    pub date: String,
}

/// Member body with its association IDs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBody {
    pub id: i64,
    pub name: String,
    pub preferred_event_type_ids: Vec<i64>,
    pub event_ids: Vec<i64>,
}

/// Confirmation body
#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
