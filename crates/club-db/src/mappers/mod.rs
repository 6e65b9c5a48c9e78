//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - Helpers that fold join rows into the member entity

mod event;
mod event_type;
mod member;

pub use member::{member_with_associations, AssociationIndex};
