//! Event service
//!
//! Handles events, which must always point at an existing event type.

use club_core::entities::{Event, NewEvent};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{EventRequest, EventResponse};

use super::context::ServiceContext;
use super::error::{required, ServiceError, ServiceResult};

const REQUIRED_FIELDS: &str = "typeId, description and date are required";

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all events ordered by ID
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_all().await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: i64) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id))?;

        Ok(EventResponse::from(event))
    }

    /// Create a new event of an existing type
    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: EventRequest) -> ServiceResult<EventResponse> {
        let new_event = Self::new_event(request)?;

        let event = self.ctx.event_repo().create(&new_event).await?;

        info!(event_id = event.id, type_id = event.type_id, "Event created");

        Ok(EventResponse::from(event))
    }

    /// Replace type, description and date of an event
    ///
    /// An unknown type is reported before a missing event.
    #[instrument(skip(self, request))]
    pub async fn update_event(&self, id: i64, request: EventRequest) -> ServiceResult<EventResponse> {
        let event: Event = Self::new_event(request)?.with_id(id);

        self.ctx.event_repo().update(&event).await?;

        info!(event_id = id, type_id = event.type_id, "Event updated");

        Ok(EventResponse::from(event))
    }

    /// Delete an event nobody is registered for
    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: i64) -> ServiceResult<()> {
        self.ctx.event_repo().delete(id).await?;

        info!(event_id = id, "Event deleted");

        Ok(())
    }

    fn new_event(request: EventRequest) -> ServiceResult<NewEvent> {
        request.validate()?;

        Ok(NewEvent {
            type_id: required(request.type_id, REQUIRED_FIELDS)?,
            description: required(request.description, REQUIRED_FIELDS)?,
            date: required(request.date, REQUIRED_FIELDS)?,
        })
    }
}
