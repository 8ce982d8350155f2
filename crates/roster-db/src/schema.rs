//! Database schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Tables and indexes for rosters and their participants. Idempotent.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS rosters (
    id           BIGSERIAL   PRIMARY KEY,
    guild_id     BIGINT      NOT NULL,
    channel_id   BIGINT      NOT NULL,
    message_id   BIGINT      NOT NULL,
    author_id    BIGINT      NOT NULL,
    max_capacity INTEGER     NOT NULL,
    status       TEXT        NOT NULL,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at   TIMESTAMPTZ
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_rosters_location ON rosters (channel_id, message_id);
CREATE INDEX IF NOT EXISTS idx_rosters_status ON rosters (status);
CREATE INDEX IF NOT EXISTS idx_rosters_guild_id ON rosters (guild_id);

CREATE TABLE IF NOT EXISTS participants (
    roster_id  BIGINT      NOT NULL REFERENCES rosters (id) ON DELETE CASCADE,
    user_id    BIGINT      NOT NULL,
    status     TEXT        NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ,
    PRIMARY KEY (roster_id, user_id)
);

CREATE INDEX IF NOT EXISTS idx_participants_roster_id ON participants (roster_id);
"#;

/// Create the tables and indexes if they do not exist yet
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
