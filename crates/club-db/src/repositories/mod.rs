//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in club-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod event;
mod event_type;
mod member;

pub use event::PgEventRepository;
pub use event_type::PgEventTypeRepository;
pub use member::PgMemberRepository;
