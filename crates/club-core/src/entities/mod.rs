//! Domain entities - core business objects

mod event;
mod event_type;
mod member;

pub use event::{Event, NewEvent};
pub use event_type::{EventType, NewEventType};
pub use member::{dedup_ids, Member, NewMember};
