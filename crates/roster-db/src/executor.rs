//! Transactional handle routed to by every PostgreSQL repository call

use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use roster_core::traits::RepoResult;

use crate::repositories::map_db_error;

/// Where a repository statement runs: a pooled autocommit connection, or the
/// open transaction of the surrounding unit of work.
///
/// Dropping a `Transaction` variant without committing rolls it back.
pub enum PgExecutor {
    Pool(PoolConnection<Postgres>),
    Transaction(Transaction<'static, Postgres>),
}

impl PgExecutor {
    /// Check out an autocommit connection
    pub async fn acquire(pool: &PgPool) -> RepoResult<Self> {
        pool.acquire().await.map(Self::Pool).map_err(map_db_error)
    }

    /// Begin a transaction
    pub async fn begin(pool: &PgPool) -> RepoResult<Self> {
        pool.begin().await.map(Self::Transaction).map_err(map_db_error)
    }

    /// The connection statements should run on: the transaction when one is
    /// attached, the pooled connection otherwise
    pub fn conn(&mut self) -> &mut PgConnection {
        match self {
            Self::Pool(conn) => &mut **conn,
            Self::Transaction(tx) => &mut **tx,
        }
    }

    #[inline]
    pub fn in_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }

    /// Commit the transaction; a no-op for pooled connections
    pub async fn commit(self) -> RepoResult<()> {
        match self {
            Self::Pool(_) => Ok(()),
            Self::Transaction(tx) => tx.commit().await.map_err(map_db_error),
        }
    }

    /// Roll the transaction back; a no-op for pooled connections
    pub async fn rollback(self) -> RepoResult<()> {
        match self {
            Self::Pool(_) => Ok(()),
            Self::Transaction(tx) => tx.rollback().await.map_err(map_db_error),
        }
    }
}

impl std::fmt::Debug for PgExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool(_) => f.write_str("PgExecutor::Pool"),
            Self::Transaction(_) => f.write_str("PgExecutor::Transaction"),
        }
    }
}
