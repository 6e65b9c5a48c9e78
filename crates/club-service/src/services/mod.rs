//! Business logic services
//!
//! Each service validates its input, then hands the work to the repositories
//! in the [`ServiceContext`]. Every repository call is one atomic unit.

pub mod context;
pub mod error;
pub mod event;
pub mod event_type;
pub mod member;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use event_type::EventTypeService;
pub use member::MemberService;
