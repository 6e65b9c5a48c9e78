//! EventType entity <-> model mapper

use club_core::entities::EventType;

use crate::models::EventTypeModel;

impl From<EventTypeModel> for EventType {
    fn from(model: EventTypeModel) -> Self {
        EventType {
            id: model.id,
            description: model.description,
        }
    }
}
