//! Member entity <-> model mapper

use std::collections::HashMap;

use club_core::entities::Member;

use crate::models::{MemberEventModel, MemberEventTypeModel, MemberModel};

/// Convert MemberModel with its association IDs to a Member entity
pub fn member_with_associations(
    model: MemberModel,
    preferred_event_type_ids: Vec<i64>,
    event_ids: Vec<i64>,
) -> Member {
    Member {
        id: model.id,
        name: model.name,
        preferred_event_type_ids,
        event_ids,
    }
}

/// Join rows grouped by member, for enriching a batch of members at once
#[derive(Debug, Default)]
pub struct AssociationIndex {
    preferences: HashMap<i64, Vec<i64>>,
    registrations: HashMap<i64, Vec<i64>>,
}

impl AssociationIndex {
    pub fn new(preferences: Vec<MemberEventTypeModel>, registrations: Vec<MemberEventModel>) -> Self {
        let mut index = Self::default();
        for row in preferences {
            index
                .preferences
                .entry(row.member_id)
                .or_default()
                .push(row.event_type_id);
        }
        for row in registrations {
            index
                .registrations
                .entry(row.member_id)
                .or_default()
                .push(row.event_id);
        }
        index
    }

    /// Build the member entity, taking its rows out of the index
    pub fn attach(&mut self, model: MemberModel) -> Member {
        let preferences = self.preferences.remove(&model.id).unwrap_or_default();
        let registrations = self.registrations.remove(&model.id).unwrap_or_default();
        member_with_associations(model, preferences, registrations)
    }
}
