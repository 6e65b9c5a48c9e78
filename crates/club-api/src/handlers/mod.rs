//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod event_types;
pub mod events;
pub mod health;
pub mod members;
