//! Event type service
//!
//! Handles listing, creation, renaming and guarded deletion of event types.

use club_core::entities::{EventType, NewEventType};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{EventTypeRequest, EventTypeResponse};

use super::context::ServiceContext;
use super::error::{required, ServiceError, ServiceResult};

/// Event type service
pub struct EventTypeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventTypeService<'a> {
    /// Create a new EventTypeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all event types ordered by ID
    #[instrument(skip(self))]
    pub async fn list_event_types(&self) -> ServiceResult<Vec<EventTypeResponse>> {
        let event_types = self.ctx.event_type_repo().find_all().await?;
        Ok(event_types.into_iter().map(EventTypeResponse::from).collect())
    }

    /// Get event type by ID
    #[instrument(skip(self))]
    pub async fn get_event_type(&self, id: i64) -> ServiceResult<EventTypeResponse> {
        let event_type = self
            .ctx
            .event_type_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event type", id))?;

        Ok(EventTypeResponse::from(event_type))
    }

    /// Create a new event type
    #[instrument(skip(self, request))]
    pub async fn create_event_type(&self, request: EventTypeRequest) -> ServiceResult<EventTypeResponse> {
        request.validate()?;
        let description = required(request.description, "Description is required")?;

        let event_type = self
            .ctx
            .event_type_repo()
            .create(&NewEventType::new(description))
            .await?;

        info!(event_type_id = event_type.id, "Event type created");

        Ok(EventTypeResponse::from(event_type))
    }

    /// Replace the description of an event type
    #[instrument(skip(self, request))]
    pub async fn update_event_type(
        &self,
        id: i64,
        request: EventTypeRequest,
    ) -> ServiceResult<EventTypeResponse> {
        request.validate()?;
        let description = required(request.description, "Description is required")?;

        let event_type = EventType::new(id, description);
        self.ctx.event_type_repo().update(&event_type).await?;

        info!(event_type_id = id, "Event type updated");

        Ok(EventTypeResponse::from(event_type))
    }

    /// Delete an event type no event refers to
    #[instrument(skip(self))]
    pub async fn delete_event_type(&self, id: i64) -> ServiceResult<()> {
        self.ctx.event_type_repo().delete(id).await?;

        info!(event_type_id = id, "Event type deleted");

        Ok(())
    }
}
