//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required fields are `Option`s so that a missing field is reported by
//! validation instead of by the JSON decoder.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Event Type Requests
// ============================================================================

/// Create or update an event type
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventTypeRequest {
    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create or update an event
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(
        required(message = "typeId, description and date are required"),
        range(min = 1, message = "typeId must be a positive id")
    )]
    pub type_id: Option<i64>,

    #[validate(
        required(message = "typeId, description and date are required"),
        length(min = 1, message = "typeId, description and date are required")
    )]
    pub description: Option<String>,

    /// Calendar date, `YYYY-MM-DD`
    #[validate(required(message = "typeId, description and date are required"))]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create or update a member
///
/// Omitted lists are treated as empty: an update replaces both sets.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,

    pub preferred_event_type_ids: Option<Vec<i64>>,

    pub event_ids: Option<Vec<i64>>,
}

/// Add a preferred event type to a member
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPreferenceRequest {
    #[validate(
        required(message = "eventTypeId is required"),
        range(min = 1, message = "eventTypeId is required")
    )]
    pub event_type_id: Option<i64>,
}

/// Register a member for an event
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddRegistrationRequest {
    #[validate(
        required(message = "eventId is required"),
        range(min = 1, message = "eventId is required")
    )]
    pub event_id: Option<i64>,
}
