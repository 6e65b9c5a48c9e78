//! Service context - dependency container for services
//!
//! Holds the repositories and, when backed by PostgreSQL, the connection pool.

use std::sync::Arc;

use club_core::traits::{EventRepository, EventTypeRepository, MemberRepository};
use club_db::{
    InMemoryStore, PgEventRepository, PgEventTypeRepository, PgMemberRepository, PgPool,
};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool; absent for the in-memory store
    pool: Option<PgPool>,

    // Repositories
    event_type_repo: Arc<dyn EventTypeRepository>,
    event_repo: Arc<dyn EventRepository>,
    member_repo: Arc<dyn MemberRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        event_type_repo: Arc<dyn EventTypeRepository>,
        event_repo: Arc<dyn EventRepository>,
        member_repo: Arc<dyn MemberRepository>,
    ) -> Self {
        Self {
            pool,
            event_type_repo,
            event_repo,
            member_repo,
        }
    }

    /// Context backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgEventTypeRepository::new(pool.clone())),
            Arc::new(PgEventRepository::new(pool.clone())),
            Arc::new(PgMemberRepository::new(pool)),
        )
    }

    /// Context backed by one shared in-memory store
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self::new(
            None,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    /// Check that the datastore can serve requests
    ///
    /// The in-memory store is always ready.
    pub async fn check_database(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }

    // === Repositories ===

    /// Get the event type repository
    pub fn event_type_repo(&self) -> &dyn EventTypeRepository {
        self.event_type_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}
