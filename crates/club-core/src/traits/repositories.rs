//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every method is one atomic unit of work: implementations that issue several
//! statements must run them in a single transaction, including the referential
//! checks that guard a write or a delete.

use async_trait::async_trait;

use crate::entities::{Event, EventType, Member, NewEvent, NewEventType, NewMember};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Type Repository
// ============================================================================

#[async_trait]
pub trait EventTypeRepository: Send + Sync {
    /// List all event types ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<EventType>>;

    /// Find event type by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventType>>;

    /// Event types a member prefers, ordered by ID
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<EventType>>;

    /// Insert a new event type and return it with its assigned ID
    async fn create(&self, event_type: &NewEventType) -> RepoResult<EventType>;

    /// Update the description
    ///
    /// Fails with `EventTypeNotFound` if no row matched.
    async fn update(&self, event_type: &EventType) -> RepoResult<()>;

    /// Delete an event type that no event references
    ///
    /// Fails with `EventTypeInUse` if any event has this type,
    /// otherwise with `EventTypeNotFound` if no row matched.
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List all events ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    /// Find event by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>>;

    /// Events a member is registered for, ordered by ID
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Event>>;

    /// Insert a new event
    ///
    /// Fails with `InvalidEventType` if the referenced type does not exist.
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Update type, description and date
    ///
    /// Fails with `InvalidEventType` if the referenced type does not exist,
    /// otherwise with `EventNotFound` if no row matched.
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Delete an event nobody is registered for
    ///
    /// Fails with `EventHasRegistrations` if any registration references it,
    /// otherwise with `EventNotFound` if no row matched.
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members with their preference and registration IDs
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// Find member by ID, with preference and registration IDs
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Check if a member row exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Insert a member together with its join rows
    ///
    /// Referenced event type and event IDs are not checked.
    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Update the name and replace both association sets
    ///
    /// Fails with `MemberNotFound` if no row matched; nothing is changed then.
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Delete all join rows of the member, then the member row
    ///
    /// Join rows are removed even when the member row is absent, in which
    /// case `MemberNotFound` is returned.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Add a preferred event type; adding an existing pair is a no-op
    async fn add_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()>;

    /// Remove a preferred event type; removing a missing pair is a no-op
    async fn remove_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()>;

    /// Register the member for an event; adding an existing pair is a no-op
    ///
    /// Fails with `InvalidEvent` if the event does not exist.
    async fn add_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()>;

    /// Remove a registration; removing a missing pair is a no-op
    async fn remove_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()>;
}
