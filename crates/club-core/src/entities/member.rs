//! Member entity - a person tracked by the club, with preferences and registrations

/// Member entity, enriched with its two association sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Event types the member prefers (memberEventTypes rows)
    pub preferred_event_type_ids: Vec<i64>,
    /// Events the member is registered for (memberEvents rows)
    pub event_ids: Vec<i64>,
}

impl Member {
    /// Create a member without any associations
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preferred_event_type_ids: Vec::new(),
            event_ids: Vec::new(),
        }
    }

    /// Replace the preference set (full replace, duplicates collapsed)
    pub fn set_preferred_event_types(&mut self, event_type_ids: Vec<i64>) {
        self.preferred_event_type_ids = dedup_ids(event_type_ids);
    }

    /// Replace the registration set (full replace, duplicates collapsed)
    pub fn set_events(&mut self, event_ids: Vec<i64>) {
        self.event_ids = dedup_ids(event_ids);
    }
}

/// Values for a new member; the ID is assigned by the datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub preferred_event_type_ids: Vec<i64>,
    pub event_ids: Vec<i64>,
}

impl NewMember {
    pub fn new(name: impl Into<String>, preferred_event_type_ids: Vec<i64>, event_ids: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            preferred_event_type_ids: dedup_ids(preferred_event_type_ids),
            event_ids: dedup_ids(event_ids),
        }
    }

    /// Attach the ID the datastore assigned
    pub fn with_id(self, id: i64) -> Member {
        Member {
            id,
            name: self.name,
            preferred_event_type_ids: self.preferred_event_type_ids,
            event_ids: self.event_ids,
        }
    }
}

/// Remove repeated IDs, keeping the first occurrence order
pub fn dedup_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
