//! # club-db
//!
//! Database layer implementing the repository traits of `club-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema setup
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations; every multi-statement operation
//!   runs in one transaction
//! - [`InMemoryStore`], an in-process implementation of the same traits for
//!   local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use club_db::repositories::PgMemberRepository;
//! use club_core::traits::MemberRepository;
//!
//! async fn example(app_config: &club_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from(&app_config.database);
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let member_repo = PgMemberRepository::new(pool);
//!
//!     let members = member_repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgEventRepository, PgEventTypeRepository, PgMemberRepository};
