//! # club-service
//!
//! Application layer: the relationship store operations over event types,
//! events and members, plus the request/response DTOs of the REST surface.

pub mod dto;
pub mod services;

pub use dto::{
    ActionResponse, AddPreferenceRequest, AddRegistrationRequest, EventRequest, EventResponse,
    EventTypeRequest, EventTypeResponse, HealthChecks, HealthResponse, MemberRequest,
    MemberResponse, ReadinessResponse,
};
pub use services::{
    EventService, EventTypeService, MemberService, ServiceContext,
    ServiceError, ServiceResult,
};
