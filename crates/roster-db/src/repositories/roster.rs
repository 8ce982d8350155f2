//! PostgreSQL implementation of RosterRepository

use async_trait::async_trait;
use tracing::instrument;

use roster_core::entities::{NewRoster, Roster, RosterId};
use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, RosterRepository};
use roster_core::value_objects::Snowflake;

use crate::executor::PgExecutor;
use crate::mappers::RosterInsert;
use crate::models::RosterModel;

use super::error::{map_db_error, map_unique_violation, roster_not_found};

const SELECT_BY_LOCATION: &str = r#"
    SELECT id, guild_id, channel_id, message_id, author_id, max_capacity, status,
           created_at, updated_at
    FROM rosters
    WHERE channel_id = $1 AND message_id = $2
"#;

const SELECT_BY_LOCATION_FOR_UPDATE: &str = r#"
    SELECT id, guild_id, channel_id, message_id, author_id, max_capacity, status,
           created_at, updated_at
    FROM rosters
    WHERE channel_id = $1 AND message_id = $2
    FOR UPDATE
"#;

/// PostgreSQL implementation of RosterRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgRosterRepository;

impl PgRosterRepository {
    /// Create a new PgRosterRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RosterRepository<PgExecutor> for PgRosterRepository {
    #[instrument(skip(self, tx))]
    async fn get(&self, tx: &mut PgExecutor, id: RosterId) -> RepoResult<Roster> {
        let model = sqlx::query_as::<_, RosterModel>(
            r#"
            SELECT id, guild_id, channel_id, message_id, author_id, max_capacity, status,
                   created_at, updated_at
            FROM rosters
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(tx.conn())
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| roster_not_found(id))?;

        Roster::try_from(model)
    }

    /// Inside a transaction the row is read `FOR UPDATE`, so concurrent
    /// mutations of the same roster queue behind the current one.
    #[instrument(skip(self, tx), fields(locked = tx.in_transaction()))]
    async fn get_by_location(
        &self,
        tx: &mut PgExecutor,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Roster> {
        let sql = if tx.in_transaction() {
            SELECT_BY_LOCATION_FOR_UPDATE
        } else {
            SELECT_BY_LOCATION
        };

        let model = sqlx::query_as::<_, RosterModel>(sql)
            .bind(channel_id.into_inner())
            .bind(message_id.into_inner())
            .fetch_optional(tx.conn())
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::RosterNotFoundAt {
                channel: channel_id,
                message: message_id,
            })?;

        Roster::try_from(model)
    }

    #[instrument(skip(self, tx, roster), fields(channel_id = %roster.channel_id, message_id = %roster.message_id))]
    async fn create(&self, tx: &mut PgExecutor, roster: &NewRoster) -> RepoResult<RosterId> {
        let insert = RosterInsert::new(roster);

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO rosters (guild_id, channel_id, message_id, author_id, max_capacity, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(insert.guild_id)
        .bind(insert.channel_id)
        .bind(insert.message_id)
        .bind(insert.author_id)
        .bind(insert.max_capacity)
        .bind(insert.status)
        .bind(roster.created_at)
        .fetch_one(tx.conn())
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RosterAlreadyExists))?;

        Ok(RosterId::new(id))
    }

    #[instrument(skip(self, tx, roster), fields(roster_id = %roster.id))]
    async fn update(&self, tx: &mut PgExecutor, roster: &Roster) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE rosters
            SET max_capacity = $2, status = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(roster.id.into_inner())
        .bind(roster.max_capacity)
        .bind(roster.status.as_str())
        .execute(tx.conn())
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(roster_not_found(roster.id));
        }

        Ok(())
    }

    #[instrument(skip(self, tx))]
    async fn delete(&self, tx: &mut PgExecutor, id: RosterId) -> RepoResult<()> {
        // participants go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM rosters WHERE id = $1")
            .bind(id.into_inner())
            .execute(tx.conn())
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(roster_not_found(id));
        }

        Ok(())
    }
}
