//! Event type database model

use sqlx::FromRow;

/// Database model for event_types table
#[derive(Debug, Clone, FromRow)]
pub struct EventTypeModel {
    pub id: i64,
    pub description: String,
}
