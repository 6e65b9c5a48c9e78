//! Event database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub type_id: i64,
    pub description: String,
    pub event_date: NaiveDate,
}
