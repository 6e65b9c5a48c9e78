//! Error handling utilities for repositories

use club_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create an "event type not found" error
pub fn event_type_not_found(id: i64) -> DomainError {
    DomainError::EventTypeNotFound(id)
}

/// Create an "event not found" error
pub fn event_not_found(id: i64) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found(id: i64) -> DomainError {
    DomainError::MemberNotFound(id)
}
