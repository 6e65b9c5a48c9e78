//! Member database models

use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
}

/// Database model for member_event_types table (preferences)
#[derive(Debug, Clone, FromRow)]
pub struct MemberEventTypeModel {
    pub member_id: i64,
    pub event_type_id: i64,
}

/// Database model for member_events table (registrations)
#[derive(Debug, Clone, FromRow)]
pub struct MemberEventModel {
    pub member_id: i64,
    pub event_id: i64,
}
