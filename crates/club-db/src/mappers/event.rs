//! Event entity <-> model mapper

use club_core::entities::Event;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            type_id: model.type_id,
            description: model.description,
            date: model.event_date,
        }
    }
}
