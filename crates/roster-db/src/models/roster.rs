//! Roster database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for rosters table
#[derive(Debug, Clone, FromRow)]
pub struct RosterModel {
    pub id: i64,
    pub guild_id: i64,
    pub channel_id: i64,
    pub message_id: i64,
    pub author_id: i64,
    pub max_capacity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
