//! Event type entity - the category an event belongs to (e.g. "Race", "Workshop")

/// Event type entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id: i64,
    pub description: String,
}

impl EventType {
    /// Create an EventType with an already assigned ID
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// Update the description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

/// Values for a new event type; the ID is assigned by the datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventType {
    pub description: String,
}

impl NewEventType {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Attach the ID the datastore assigned
    pub fn with_id(self, id: i64) -> EventType {
        EventType {
            id,
            description: self.description,
        }
    }
}
