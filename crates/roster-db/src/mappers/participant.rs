//! Participant entity <-> model mapper

use roster_core::entities::{Participant, RosterId};
use roster_core::error::DomainError;
use roster_core::value_objects::Snowflake;

use crate::models::ParticipantModel;

/// Convert ParticipantModel to Participant entity
impl TryFrom<ParticipantModel> for Participant {
    type Error = DomainError;

    fn try_from(model: ParticipantModel) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|e| {
            DomainError::DatabaseError(format!(
                "participant {} of roster {}: {e}",
                model.user_id, model.roster_id
            ))
        })?;

        Ok(Participant {
            roster_id: RosterId::new(model.roster_id),
            user_id: Snowflake::new(model.user_id),
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
