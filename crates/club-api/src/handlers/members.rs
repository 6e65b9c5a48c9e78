//! Member handlers
//!
//! Endpoints for members, their preferred event types and their registrations.

use axum::{extract::State, Json};
use club_service::{
    ActionResponse, AddPreferenceRequest, AddRegistrationRequest, EventResponse, EventTypeResponse,
    MemberRequest, MemberResponse, MemberService,
};

use crate::extractors::{IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List members
///
/// GET /members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list_members().await?;
    Ok(Json(members))
}

/// Get member by ID
///
/// GET /members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_member(id).await?;
    Ok(Json(member))
}

/// Create member
///
/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<MemberRequest>,
) -> ApiResult<Created<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.create_member(request).await?;
    Ok(Created(member))
}

/// Update member and replace its associations
///
/// PUT /members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(request): JsonBody<MemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.update_member(id, request).await?;
    Ok(Json(member))
}

/// Delete member
///
/// DELETE /members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<ActionResponse>> {
    let service = MemberService::new(state.service_context());
    service.delete_member(id).await?;
    Ok(Json(ActionResponse::new("Member deleted")))
}

/// List preferred event types of a member
///
/// GET /members/{id}/eventTypes
pub async fn list_preferences(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<EventTypeResponse>>> {
    let service = MemberService::new(state.service_context());
    let event_types = service.list_preferred_event_types(id).await?;
    Ok(Json(event_types))
}

/// Add a preferred event type
///
/// POST /members/{id}/eventTypes
pub async fn add_preference(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(request): JsonBody<AddPreferenceRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let service = MemberService::new(state.service_context());
    service.add_preference(id, request).await?;
    Ok(Json(ActionResponse::new("Preference added")))
}

/// Remove a preferred event type
///
/// DELETE /members/{id}/eventTypes/{event_type_id}
pub async fn remove_preference(
    State(state): State<AppState>,
    IdPath((id, event_type_id)): IdPath<(i64, i64)>,
) -> ApiResult<Json<ActionResponse>> {
    let service = MemberService::new(state.service_context());
    service.remove_preference(id, event_type_id).await?;
    Ok(Json(ActionResponse::new("Preference removed")))
}

/// List events a member is registered for
///
/// GET /members/{id}/events
pub async fn list_registrations(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = MemberService::new(state.service_context());
    let events = service.list_registered_events(id).await?;
    Ok(Json(events))
}

/// Register a member for an event
///
/// POST /members/{id}/events
pub async fn add_registration(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(request): JsonBody<AddRegistrationRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let service = MemberService::new(state.service_context());
    service.add_registration(id, request).await?;
    Ok(Json(ActionResponse::new("Registration added")))
}

/// Remove a registration
///
/// DELETE /members/{id}/events/{event_id}
pub async fn remove_registration(
    State(state): State<AppState>,
    IdPath((id, event_id)): IdPath<(i64, i64)>,
) -> ApiResult<Json<ActionResponse>> {
    let service = MemberService::new(state.service_context());
    service.remove_registration(id, event_id).await?;
    Ok(Json(ActionResponse::new("Registration removed")))
}
