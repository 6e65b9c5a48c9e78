//! Event type handlers
//!
//! Endpoints for event type management.

use axum::{extract::State, Json};
use club_service::{ActionResponse, EventTypeRequest, EventTypeResponse, EventTypeService};

use crate::extractors::{IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List event types
///
/// GET /eventTypes
pub async fn list_event_types(State(state): State<AppState>) -> ApiResult<Json<Vec<EventTypeResponse>>> {
    let service = EventTypeService::new(state.service_context());
    let event_types = service.list_event_types().await?;
    Ok(Json(event_types))
}

/// Get event type by ID
///
/// GET /eventTypes/{id}
pub async fn get_event_type(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<EventTypeResponse>> {
    let service = EventTypeService::new(state.service_context());
    let event_type = service.get_event_type(id).await?;
    Ok(Json(event_type))
}

/// Create event type
///
/// POST /eventTypes
pub async fn create_event_type(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EventTypeRequest>,
) -> ApiResult<Created<EventTypeResponse>> {
    let service = EventTypeService::new(state.service_context());
    let event_type = service.create_event_type(request).await?;
    Ok(Created(event_type))
}

/// Update event type
///
/// PUT /eventTypes/{id}
pub async fn update_event_type(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(request): JsonBody<EventTypeRequest>,
) -> ApiResult<Json<EventTypeResponse>> {
    let service = EventTypeService::new(state.service_context());
    let event_type = service.update_event_type(id, request).await?;
    Ok(Json(event_type))
}

/// Delete event type
///
/// DELETE /eventTypes/{id}
pub async fn delete_event_type(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<ActionResponse>> {
    let service = EventTypeService::new(state.service_context());
    service.delete_event_type(id).await?;
    Ok(Json(ActionResponse::new("Event type deleted")))
}
