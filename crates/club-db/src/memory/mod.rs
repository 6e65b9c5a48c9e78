//! In-memory implementation of the repository traits
//!
//! Backs local runs with `DATABASE_URL=memory://` and the service/API tests.
//! Every operation holds one mutex for its whole duration, so each call is as
//! atomic as the transactional PostgreSQL implementation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use club_core::entities::{Event, EventType, Member, NewEvent, NewEventType, NewMember};
use club_core::error::DomainError;
use club_core::traits::{EventRepository, EventTypeRepository, MemberRepository, RepoResult};

#[derive(Debug)]
struct State {
    next_event_type_id: i64,
    next_event_id: i64,
    next_member_id: i64,
    event_types: BTreeMap<i64, String>,
    events: BTreeMap<i64, Event>,
    members: BTreeMap<i64, String>,
    /// (member_id, event_type_id)
    preferences: BTreeSet<(i64, i64)>,
    /// (member_id, event_id)
    registrations: BTreeSet<(i64, i64)>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_event_type_id: 1,
            next_event_id: 1,
            next_member_id: 1,
            event_types: BTreeMap::new(),
            events: BTreeMap::new(),
            members: BTreeMap::new(),
            preferences: BTreeSet::new(),
            registrations: BTreeSet::new(),
        }
    }
}

impl State {
    fn preference_ids(&self, member_id: i64) -> Vec<i64> {
        self.preferences
            .range((member_id, i64::MIN)..=(member_id, i64::MAX))
            .map(|&(_, event_type_id)| event_type_id)
            .collect()
    }

    fn event_ids(&self, member_id: i64) -> Vec<i64> {
        self.registrations
            .range((member_id, i64::MIN)..=(member_id, i64::MAX))
            .map(|&(_, event_id)| event_id)
            .collect()
    }

    fn member(&self, id: i64, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            preferred_event_type_ids: self.preference_ids(id),
            event_ids: self.event_ids(id),
        }
    }

    fn clear_associations(&mut self, member_id: i64) {
        self.preferences.retain(|&(m, _)| m != member_id);
        self.registrations.retain(|&(m, _)| m != member_id);
    }

    fn insert_associations(&mut self, member_id: i64, preference_ids: &[i64], event_ids: &[i64]) {
        self.preferences
            .extend(preference_ids.iter().map(|&id| (member_id, id)));
        self.registrations
            .extend(event_ids.iter().map(|&id| (member_id, id)));
    }
}

/// Shared in-process store; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventTypeRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<EventType>> {
        let state = self.state.lock();
        Ok(state
            .event_types
            .iter()
            .map(|(&id, description)| EventType::new(id, description.clone()))
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventType>> {
        let state = self.state.lock();
        Ok(state
            .event_types
            .get(&id)
            .map(|description| EventType::new(id, description.clone())))
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<EventType>> {
        let state = self.state.lock();
        Ok(state
            .preference_ids(member_id)
            .into_iter()
            .filter_map(|id| {
                state
                    .event_types
                    .get(&id)
                    .map(|description| EventType::new(id, description.clone()))
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event_type: &NewEventType) -> RepoResult<EventType> {
        let mut state = self.state.lock();
        let id = state.next_event_type_id;
        state.next_event_type_id += 1;
        state.event_types.insert(id, event_type.description.clone());
        Ok(event_type.clone().with_id(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, event_type: &EventType) -> RepoResult<()> {
        let mut state = self.state.lock();
        match state.event_types.get_mut(&event_type.id) {
            Some(description) => {
                description.clone_from(&event_type.description);
                Ok(())
            }
            None => Err(DomainError::EventTypeNotFound(event_type.id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.events.values().any(|event| event.is_of_type(id)) {
            return Err(DomainError::EventTypeInUse(id));
        }
        match state.event_types.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::EventTypeNotFound(id)),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let state = self.state.lock();
        Ok(state.events.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let state = self.state.lock();
        Ok(state.events.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Event>> {
        let state = self.state.lock();
        Ok(state
            .event_ids(member_id)
            .into_iter()
            .filter_map(|id| state.events.get(&id).cloned())
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut state = self.state.lock();
        if !state.event_types.contains_key(&event.type_id) {
            return Err(DomainError::InvalidEventType(event.type_id));
        }
        let id = state.next_event_id;
        state.next_event_id += 1;
        let event = event.clone().with_id(id);
        state.events.insert(id, event.clone());
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.event_types.contains_key(&event.type_id) {
            return Err(DomainError::InvalidEventType(event.type_id));
        }
        match state.events.get_mut(&event.id) {
            Some(stored) => {
                *stored = event.clone();
                Ok(())
            }
            None => Err(DomainError::EventNotFound(event.id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.registrations.iter().any(|&(_, event_id)| event_id == id) {
            return Err(DomainError::EventHasRegistrations(id));
        }
        match state.events.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::EventNotFound(id)),
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let state = self.state.lock();
        Ok(state
            .members
            .iter()
            .map(|(&id, name)| state.member(id, name))
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let state = self.state.lock();
        Ok(state.members.get(&id).map(|name| state.member(id, name)))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        Ok(self.state.lock().members.contains_key(&id))
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let mut state = self.state.lock();
        let id = state.next_member_id;
        state.next_member_id += 1;
        state.members.insert(id, member.name.clone());
        state.insert_associations(id, &member.preferred_event_type_ids, &member.event_ids);
        Ok(state.member(id, &member.name))
    }

    #[instrument(skip(self))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut state = self.state.lock();
        match state.members.get_mut(&member.id) {
            Some(name) => name.clone_from(&member.name),
            None => return Err(DomainError::MemberNotFound(member.id)),
        }
        state.clear_associations(member.id);
        state.insert_associations(member.id, &member.preferred_event_type_ids, &member.event_ids);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.clear_associations(id);
        match state.members.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::MemberNotFound(id)),
        }
    }

    #[instrument(skip(self))]
    async fn add_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()> {
        self.state.lock().preferences.insert((member_id, event_type_id));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()> {
        self.state.lock().preferences.remove(&(member_id, event_type_id));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.events.contains_key(&event_id) {
            return Err(DomainError::InvalidEvent(event_id));
        }
        state.registrations.insert((member_id, event_id));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()> {
        self.state.lock().registrations.remove(&(member_id, event_id));
        Ok(())
    }
}
