//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use tracing::instrument;

use roster_core::entities::{Participant, ParticipantStatus, RosterId};
use roster_core::traits::{ParticipantRepository, RepoResult};
use roster_core::value_objects::Snowflake;

use crate::executor::PgExecutor;
use crate::models::ParticipantModel;

use super::error::{map_db_error, map_foreign_key_violation, roster_not_found};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgParticipantRepository;

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ParticipantRepository<PgExecutor> for PgParticipantRepository {
    // clock_timestamp() keeps inserts made within one transaction in order
    #[instrument(skip(self, tx))]
    async fn upsert(
        &self,
        tx: &mut PgExecutor,
        roster_id: RosterId,
        user_id: Snowflake,
        status: ParticipantStatus,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO participants (roster_id, user_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, clock_timestamp(), clock_timestamp())
            ON CONFLICT (roster_id, user_id)
            DO UPDATE SET status = EXCLUDED.status, updated_at = clock_timestamp()
            "#,
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .bind(status.as_str())
        .execute(tx.conn())
        .await
        .map_err(|e| map_foreign_key_violation(e, || roster_not_found(roster_id)))?;

        Ok(())
    }

    #[instrument(skip(self, tx))]
    async fn find_one(
        &self,
        tx: &mut PgExecutor,
        roster_id: RosterId,
        user_id: Snowflake,
    ) -> RepoResult<Option<Participant>> {
        let result = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT roster_id, user_id, status, created_at, updated_at
            FROM participants
            WHERE roster_id = $1 AND user_id = $2
            "#,
        )
        .bind(roster_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(tx.conn())
        .await
        .map_err(map_db_error)?;

        result.map(Participant::try_from).transpose()
    }

    #[instrument(skip(self, tx))]
    async fn list_by_roster(
        &self,
        tx: &mut PgExecutor,
        roster_id: RosterId,
    ) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT roster_id, user_id, status, created_at, updated_at
            FROM participants
            WHERE roster_id = $1
            ORDER BY created_at ASC, user_id ASC
            "#,
        )
        .bind(roster_id.into_inner())
        .fetch_all(tx.conn())
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Participant::try_from).collect()
    }

    #[instrument(skip(self, tx))]
    async fn delete_all_by_roster(&self, tx: &mut PgExecutor, roster_id: RosterId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM participants WHERE roster_id = $1")
            .bind(roster_id.into_inner())
            .execute(tx.conn())
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
