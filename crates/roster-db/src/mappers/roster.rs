//! Roster entity <-> model mapper

use roster_core::entities::{NewRoster, Roster, RosterId};
use roster_core::error::DomainError;
use roster_core::value_objects::Snowflake;

use crate::models::RosterModel;

/// Convert RosterModel to Roster entity
impl TryFrom<RosterModel> for Roster {
    type Error = DomainError;

    fn try_from(model: RosterModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("roster {}: {e}", model.id)))?;

        Ok(Roster {
            id: RosterId::new(model.id),
            guild_id: Snowflake::new(model.guild_id),
            channel_id: Snowflake::new(model.channel_id),
            message_id: Snowflake::new(model.message_id),
            author_id: Snowflake::new(model.author_id),
            max_capacity: model.max_capacity,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values of a new roster ready for database insertion
pub struct RosterInsert {
    pub guild_id: i64,
    pub channel_id: i64,
    pub message_id: i64,
    pub author_id: i64,
    pub max_capacity: i32,
    pub status: &'static str,
}

impl RosterInsert {
    pub fn new(roster: &NewRoster) -> Self {
        Self {
            guild_id: roster.guild_id.into_inner(),
            channel_id: roster.channel_id.into_inner(),
            message_id: roster.message_id.into_inner(),
            author_id: roster.author_id.into_inner(),
            max_capacity: roster.max_capacity,
            status: roster.status.as_str(),
        }
    }
}
