//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use club_core::entities::{Event, EventType, Member};

use super::responses::{EventResponse, EventTypeResponse, MemberResponse};

impl From<&EventType> for EventTypeResponse {
    fn from(event_type: &EventType) -> Self {
        Self {
            id: event_type.id,
            description: event_type.description.clone(),
        }
    }
}

impl From<EventType> for EventTypeResponse {
    fn from(event_type: EventType) -> Self {
        Self {
            id: event_type.id,
            description: event_type.description,
        }
    }
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            type_id: event.type_id,
            description: event.description.clone(),
            date: event.date,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            type_id: event.type_id,
            description: event.description,
            date: event.date,
        }
    }
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self::from(member.clone())
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            preferred_event_type_ids: member.preferred_event_type_ids,
            event_ids: member.event_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_mapping_keeps_associations() {
        let mut member = Member::new(1, "Ana");
        member.set_preferred_event_types(vec![2, 2, 1]);
        member.set_events(vec![5]);

        let response = MemberResponse::from(&member);
        assert_eq!(response.name, "Ana");
        assert_eq!(response.preferred_event_type_ids, vec![2, 1]);
        assert_eq!(response.event_ids, vec![5]);
    }
}
