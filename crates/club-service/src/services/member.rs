//! Member service
//!
//! Handles members together with their preferred event types and event
//! registrations. Create and update replace both association sets at once.

use club_core::entities::{Member, NewMember};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    AddPreferenceRequest, AddRegistrationRequest, EventResponse, EventTypeResponse, MemberRequest,
    MemberResponse,
};

use super::context::ServiceContext;
use super::error::{required, ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all members with their association IDs
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().find_all().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, id: i64) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", id))?;

        Ok(MemberResponse::from(member))
    }

    /// Create a member with its preferences and registrations
    ///
    /// The listed IDs are stored as given, without existence checks.
    #[instrument(skip(self, request))]
    pub async fn create_member(&self, request: MemberRequest) -> ServiceResult<MemberResponse> {
        request.validate()?;
        let name = required(request.name, "Name is required")?;

        let new_member = NewMember::new(
            name,
            request.preferred_event_type_ids.unwrap_or_default(),
            request.event_ids.unwrap_or_default(),
        );
        let member = self.ctx.member_repo().create(&new_member).await?;

        info!(member_id = member.id, "Member created");

        Ok(MemberResponse::from(member))
    }

    /// Rename a member and replace both association sets
    ///
    /// An omitted list clears that set.
    #[instrument(skip(self, request))]
    pub async fn update_member(&self, id: i64, request: MemberRequest) -> ServiceResult<MemberResponse> {
        request.validate()?;
        let name = required(request.name, "Name is required")?;

        let mut member = Member::new(id, name);
        member.set_preferred_event_types(request.preferred_event_type_ids.unwrap_or_default());
        member.set_events(request.event_ids.unwrap_or_default());

        self.ctx.member_repo().update(&member).await?;

        info!(member_id = id, "Member updated");

        // Reads return association IDs in ID order
        member.preferred_event_type_ids.sort_unstable();
        member.event_ids.sort_unstable();

        Ok(MemberResponse::from(member))
    }

    /// Delete a member and all of its join rows
    #[instrument(skip(self))]
    pub async fn delete_member(&self, id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;

        info!(member_id = id, "Member deleted");

        Ok(())
    }

    /// Add a preferred event type
    ///
    /// Neither the member nor the event type is checked.
    #[instrument(skip(self, request))]
    pub async fn add_preference(&self, member_id: i64, request: AddPreferenceRequest) -> ServiceResult<()> {
        request.validate()?;
        let event_type_id = required(request.event_type_id, "eventTypeId is required")?;

        self.ctx
            .member_repo()
            .add_preference(member_id, event_type_id)
            .await?;

        info!(member_id, event_type_id, "Preference added");

        Ok(())
    }

    /// Remove a preferred event type; a missing pair is not an error
    #[instrument(skip(self))]
    pub async fn remove_preference(&self, member_id: i64, event_type_id: i64) -> ServiceResult<()> {
        self.ctx
            .member_repo()
            .remove_preference(member_id, event_type_id)
            .await?;

        info!(member_id, event_type_id, "Preference removed");

        Ok(())
    }

    /// Register a member for an existing event
    ///
    /// The member ID is not checked.
    #[instrument(skip(self, request))]
    pub async fn add_registration(&self, member_id: i64, request: AddRegistrationRequest) -> ServiceResult<()> {
        request.validate()?;
        let event_id = required(request.event_id, "eventId is required")?;

        self.ctx
            .member_repo()
            .add_registration(member_id, event_id)
            .await?;

        info!(member_id, event_id, "Registration added");

        Ok(())
    }

    /// Remove a registration; a missing pair is not an error
    #[instrument(skip(self))]
    pub async fn remove_registration(&self, member_id: i64, event_id: i64) -> ServiceResult<()> {
        self.ctx
            .member_repo()
            .remove_registration(member_id, event_id)
            .await?;

        info!(member_id, event_id, "Registration removed");

        Ok(())
    }

    /// Event types a member prefers
    #[instrument(skip(self))]
    pub async fn list_preferred_event_types(&self, member_id: i64) -> ServiceResult<Vec<EventTypeResponse>> {
        self.require_member(member_id).await?;

        let event_types = self.ctx.event_type_repo().find_by_member(member_id).await?;
        Ok(event_types.into_iter().map(EventTypeResponse::from).collect())
    }

    /// Events a member is registered for
    #[instrument(skip(self))]
    pub async fn list_registered_events(&self, member_id: i64) -> ServiceResult<Vec<EventResponse>> {
        self.require_member(member_id).await?;

        let events = self.ctx.event_repo().find_by_member(member_id).await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    async fn require_member(&self, member_id: i64) -> ServiceResult<()> {
        if self.ctx.member_repo().exists(member_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Member", member_id))
        }
    }
}
