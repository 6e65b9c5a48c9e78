//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event type not found: {0}")]
    EventTypeNotFound(i64),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// An event points at an event type that does not exist
    #[error("Invalid event type: {0}")]
    InvalidEventType(i64),

    /// A registration points at an event that does not exist
    #[error("Event not found: {0}")]
    InvalidEvent(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Cannot delete event type {0}: events still reference it")]
    EventTypeInUse(i64),

    #[error("Cannot delete event {0}: members are still registered")]
    EventHasRegistrations(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventTypeNotFound(_) => "UNKNOWN_EVENT_TYPE",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",

            // Validation
            Self::InvalidEventType(_) => "INVALID_EVENT_TYPE",
            Self::InvalidEvent(_) => "INVALID_EVENT",

            // Conflict
            Self::EventTypeInUse(_) => "EVENT_TYPE_IN_USE",
            Self::EventHasRegistrations(_) => "EVENT_HAS_REGISTRATIONS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventTypeNotFound(_) | Self::EventNotFound(_) | Self::MemberNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEventType(_) | Self::InvalidEvent(_)
        )
    }

    /// Check if this is a conflict error (delete blocked by a dependent row)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EventTypeInUse(_) | Self::EventHasRegistrations(_)
        )
    }
}
