//! # roster-db
//!
//! Persistence layer implementing the roster ports.
//!
//! ## Overview
//!
//! Two interchangeable stores implement `RosterRepository`, `ParticipantRepository`
//! and `UnitOfWork` from `roster-core`:
//!
//! - PostgreSQL via SQLx: [`PgUnitOfWork`] hands a [`PgExecutor`] to each unit of
//!   work, and every repository statement runs through it
//! - [`MemoryStore`]: a lock-guarded in-memory copy with the same transactional
//!   behaviour, used by tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{apply_schema, create_pool, DatabaseConfig, PgRosterRepository, PgUnitOfWork};
//! use roster_core::{RosterRepository, UnitOfWork};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     apply_schema(&pool).await?;
//!
//!     let uow = PgUnitOfWork::new(pool);
//!     let rosters = PgRosterRepository::new();
//!     let roster = uow
//!         .run(|tx| Box::pin(async move { rosters.get(tx, 1.into()).await }))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod executor;
pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod unit_of_work;

// Re-export commonly used types
pub use executor::PgExecutor;
pub use memory::{
    MemoryParticipantRepository, MemoryRosterRepository, MemoryState, MemoryStore, MemoryTx,
};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgParticipantRepository, PgRosterRepository};
pub use schema::{apply_schema, SCHEMA};
pub use unit_of_work::PgUnitOfWork;
