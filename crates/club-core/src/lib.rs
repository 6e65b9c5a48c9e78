//! # club-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{dedup_ids, Event, EventType, Member, NewEvent, NewEventType, NewMember};
pub use error::DomainError;
pub use traits::{EventRepository, EventTypeRepository, MemberRepository, RepoResult};
