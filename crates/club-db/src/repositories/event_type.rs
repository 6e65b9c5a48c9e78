//! PostgreSQL implementation of EventTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{EventType, NewEventType};
use club_core::error::DomainError;
use club_core::traits::{EventTypeRepository, RepoResult};

use crate::models::EventTypeModel;

use super::error::{event_type_not_found, map_db_error};

/// PostgreSQL implementation of EventTypeRepository
#[derive(Clone)]
pub struct PgEventTypeRepository {
    pool: PgPool,
}

impl PgEventTypeRepository {
    /// Create a new PgEventTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventTypeRepository for PgEventTypeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<EventType>> {
        let results = sqlx::query_as::<_, EventTypeModel>(
            r#"
            SELECT id, description FROM event_types ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EventType::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventType>> {
        let result = sqlx::query_as::<_, EventTypeModel>(
            r#"
            SELECT id, description FROM event_types WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(EventType::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<EventType>> {
        let results = sqlx::query_as::<_, EventTypeModel>(
            r#"
            SELECT et.id, et.description
            FROM event_types et
            JOIN member_event_types met ON met.event_type_id = et.id
            WHERE met.member_id = $1
            ORDER BY et.id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EventType::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event_type: &NewEventType) -> RepoResult<EventType> {
        let model = sqlx::query_as::<_, EventTypeModel>(
            r#"
            INSERT INTO event_types (description) VALUES ($1)
            RETURNING id, description
            "#,
        )
        .bind(&event_type.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn update(&self, event_type: &EventType) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE event_types SET description = $2 WHERE id = $1
            "#,
        )
        .bind(event_type.id)
        .bind(&event_type.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_type_not_found(event_type.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Event writes take FOR SHARE on the type row, so none can slip in after the check
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM event_types WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let in_use = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM events WHERE type_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if in_use {
            return Err(DomainError::EventTypeInUse(id));
        }

        let result = sqlx::query(
            r#"
            DELETE FROM event_types WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_type_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
