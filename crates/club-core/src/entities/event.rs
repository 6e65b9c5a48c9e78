//! Event entity - a scheduled occurrence of one event type

use chrono::NaiveDate;

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    /// Referenced event type; must exist whenever the event is written
    pub type_id: i64,
    pub description: String,
    pub date: NaiveDate,
}

impl Event {
    /// Check if the event belongs to a given type
    #[inline]
    pub fn is_of_type(&self, type_id: i64) -> bool {
        self.type_id == type_id
    }
}

/// Values for a new event; the ID is assigned by the datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub type_id: i64,
    pub description: String,
    pub date: NaiveDate,
}

impl NewEvent {
    /// Attach the ID the datastore assigned
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            type_id: self.type_id,
            description: self.description,
            date: self.date,
        }
    }
}
