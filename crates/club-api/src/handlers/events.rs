//! Event handlers
//!
//! Endpoints for event management.

use axum::{extract::State, Json};
use club_service::{ActionResponse, EventRequest, EventResponse, EventService};

use crate::extractors::{IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List events
///
/// GET /events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list_events().await?;
    Ok(Json(events))
}

/// Get event by ID
///
/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.get_event(id).await?;
    Ok(Json(event))
}

/// Create event
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EventRequest>,
) -> ApiResult<Created<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.create_event(request).await?;
    Ok(Created(event))
}

/// Update event
///
/// PUT /events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(request): JsonBody<EventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.update_event(id, request).await?;
    Ok(Json(event))
}

/// Delete event
///
/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<ActionResponse>> {
    let service = EventService::new(state.service_context());
    service.delete_event(id).await?;
    Ok(Json(ActionResponse::new("Event deleted")))
}
