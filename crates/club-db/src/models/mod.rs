//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod event_type;
mod member;

pub use event::EventModel;
pub use event_type::EventTypeModel;
pub use member::{MemberEventModel, MemberEventTypeModel, MemberModel};
