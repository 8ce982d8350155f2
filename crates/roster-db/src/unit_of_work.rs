//! PostgreSQL unit of work

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, UnitOfWork, WorkFuture};

use crate::executor::PgExecutor;

/// Runs each unit of work in its own PostgreSQL transaction (READ COMMITTED).
/// Writers on one roster serialize on its row lock, see
/// [`PgRosterRepository::get_by_location`](crate::PgRosterRepository).
#[derive(Clone, Debug)]
pub struct PgUnitOfWork {
    pool: PgPool,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Autocommit handle for reads outside a unit of work
    pub async fn executor(&self) -> RepoResult<PgExecutor> {
        PgExecutor::acquire(&self.pool).await
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    type Tx = PgExecutor;

    #[instrument(skip_all)]
    async fn run<T, E, F>(&self, work: F) -> Result<T, E>
    where
        T: Send,
        E: From<DomainError> + Send,
        F: for<'t> FnOnce(&'t mut Self::Tx) -> WorkFuture<'t, T, E> + Send,
    {
        let mut executor = PgExecutor::begin(&self.pool).await?;

        match work(&mut executor).await {
            Ok(value) => {
                executor.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = executor.rollback().await {
                    warn!(error = %rollback_err, "Transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}
