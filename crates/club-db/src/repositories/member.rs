//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use club_core::entities::{Member, NewMember};
use club_core::error::DomainError;
use club_core::traits::{MemberRepository, RepoResult};

use crate::mappers::{member_with_associations, AssociationIndex};
use crate::models::{MemberEventModel, MemberEventTypeModel, MemberModel};

use super::error::{map_db_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load preferred event type IDs for a member
    async fn load_preference_ids(&self, member_id: i64) -> Result<Vec<i64>, DomainError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT event_type_id FROM member_event_types
            WHERE member_id = $1
            ORDER BY event_type_id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    /// Load registered event IDs for a member
    async fn load_event_ids(&self, member_id: i64) -> Result<Vec<i64>, DomainError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT event_id FROM member_events
            WHERE member_id = $1
            ORDER BY event_id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}

/// Insert one preference row per ID; existing pairs are skipped
async fn insert_preferences(conn: &mut PgConnection, member_id: i64, ids: &[i64]) -> RepoResult<()> {
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO member_event_types (member_id, event_type_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(member_id)
    .bind(ids)
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Insert one registration row per ID; existing pairs are skipped
async fn insert_registrations(conn: &mut PgConnection, member_id: i64, ids: &[i64]) -> RepoResult<()> {
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO member_events (member_id, event_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(member_id)
    .bind(ids)
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Remove every join row of a member
async fn clear_associations(conn: &mut PgConnection, member_id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM member_event_types WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    sqlx::query("DELETE FROM member_events WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(())
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let members = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, name FROM members ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if members.is_empty() {
            return Ok(Vec::new());
        }

        let member_ids: Vec<i64> = members.iter().map(|m| m.id).collect();

        let preferences = sqlx::query_as::<_, MemberEventTypeModel>(
            r#"
            SELECT member_id, event_type_id FROM member_event_types
            WHERE member_id = ANY($1)
            ORDER BY member_id, event_type_id
            "#,
        )
        .bind(&member_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let registrations = sqlx::query_as::<_, MemberEventModel>(
            r#"
            SELECT member_id, event_id FROM member_events
            WHERE member_id = ANY($1)
            ORDER BY member_id, event_id
            "#,
        )
        .bind(&member_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut index = AssociationIndex::new(preferences, registrations);
        Ok(members.into_iter().map(|m| index.attach(m)).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, name FROM members WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let preference_ids = self.load_preference_ids(model.id).await?;
                let event_ids = self.load_event_ids(model.id).await?;
                Ok(Some(member_with_associations(model, preference_ids, event_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM members WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, MemberModel>(
            r#"
            INSERT INTO members (name) VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&member.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        insert_preferences(&mut *tx, model.id, &member.preferred_event_type_ids).await?;
        insert_registrations(&mut *tx, model.id, &member.event_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        // Same ordering as the reads
        let mut preference_ids = member.preferred_event_type_ids.clone();
        preference_ids.sort_unstable();
        let mut event_ids = member.event_ids.clone();
        event_ids.sort_unstable();

        Ok(member_with_associations(model, preference_ids, event_ids))
    }

    #[instrument(skip(self))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE members SET name = $2 WHERE id = $1
            "#,
        )
        .bind(member.id)
        .bind(&member.name)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member.id));
        }

        clear_associations(&mut *tx, member.id).await?;
        insert_preferences(&mut *tx, member.id, &member.preferred_event_type_ids).await?;
        insert_registrations(&mut *tx, member.id, &member.event_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        clear_associations(&mut *tx, id).await?;

        let result = sqlx::query(
            r#"
            DELETE FROM members WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Orphaned join rows are cleaned up even when the member row is gone
        tx.commit().await.map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO member_event_types (member_id, event_type_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(member_id)
        .bind(event_type_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_preference(&self, member_id: i64, event_type_id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM member_event_types WHERE member_id = $1 AND event_type_id = $2
            "#,
        )
        .bind(member_id)
        .bind(event_type_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Blocks a concurrent delete of the event until this registration commits
        let event = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM events WHERE id = $1 FOR SHARE
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if event.is_none() {
            return Err(DomainError::InvalidEvent(event_id));
        }

        sqlx::query(
            r#"
            INSERT INTO member_events (member_id, event_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(member_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_registration(&self, member_id: i64, event_id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM member_events WHERE member_id = $1 AND event_id = $2
            "#,
        )
        .bind(member_id)
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberRepository>();
    }
}
