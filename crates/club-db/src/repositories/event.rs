//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use club_core::entities::{Event, NewEvent};
use club_core::error::DomainError;
use club_core::traits::{EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Lock the referenced event type for the rest of the transaction
///
/// A concurrent delete of the type blocks on the lock, so the type cannot
/// disappear between this check and the event write.
async fn lock_event_type(conn: &mut PgConnection, type_id: i64) -> RepoResult<()> {
    let found = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM event_types WHERE id = $1 FOR SHARE
        "#,
    )
    .bind(type_id)
    .fetch_optional(conn)
    .await
    .map_err(map_db_error)?;

    match found {
        Some(_) => Ok(()),
        None => Err(DomainError::InvalidEventType(type_id)),
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, type_id, description, event_date FROM events ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, type_id, description, event_date FROM events WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT e.id, e.type_id, e.description, e.event_date
            FROM events e
            JOIN member_events me ON me.event_id = e.id
            WHERE me.member_id = $1
            ORDER BY e.id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_event_type(&mut *tx, event.type_id).await?;

        let model = sqlx::query_as::<_, EventModel>(
            r#"
            INSERT INTO events (type_id, description, event_date)
            VALUES ($1, $2, $3)
            RETURNING id, type_id, description, event_date
            "#,
        )
        .bind(event.type_id)
        .bind(&event.description)
        .bind(event.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_event_type(&mut *tx, event.type_id).await?;

        let result = sqlx::query(
            r#"
            UPDATE events
            SET type_id = $2, description = $3, event_date = $4
            WHERE id = $1
            "#,
        )
        .bind(event.id)
        .bind(event.type_id)
        .bind(&event.description)
        .bind(event.date)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event.id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Registrations take FOR SHARE on the event row before inserting
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM events WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let registered = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM member_events WHERE event_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if registered {
            return Err(DomainError::EventHasRegistrations(id));
        }

        let result = sqlx::query(
            r#"
            DELETE FROM events WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
