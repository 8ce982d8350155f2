//! Engine result to DTO mappers

use roster_core::RosterView;

use super::responses::{ButtonsResponse, InteractionResponse, RosterResponse};
use crate::services::{ActionOutcome, RosterButtons};

impl From<&RosterView> for RosterResponse {
    fn from(view: &RosterView) -> Self {
        let roster = &view.roster;
        Self {
            id: roster.id.to_string(),
            guild_id: roster.guild_id.to_string(),
            channel_id: roster.channel_id.to_string(),
            message_id: roster.message_id.to_string(),
            author_id: roster.author_id.to_string(),
            max_capacity: roster.max_capacity,
            status: roster.status.to_string(),
            joined_users: view.joined_users.iter().map(ToString::to_string).collect(),
            declined_users: view.declined_users.iter().map(ToString::to_string).collect(),
            remaining_slots: view.remaining_slots(),
            is_full: view.is_full(),
            extra_count: view.extra_count(),
            created_at: roster.created_at,
            updated_at: roster.updated_at,
        }
    }
}

impl From<RosterView> for RosterResponse {
    fn from(view: RosterView) -> Self {
        Self::from(&view)
    }
}

impl From<RosterButtons> for ButtonsResponse {
    fn from(buttons: RosterButtons) -> Self {
        Self {
            join: buttons.join,
            decline: buttons.decline,
        }
    }
}

impl From<ActionOutcome> for InteractionResponse {
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::StatusChanged {
                status,
                change,
                follow_up,
            } => Self::StatusChanged {
                status: status.to_string(),
                previous_status: change.previous_status.map(|s| s.to_string()),
                roster: RosterResponse::from(&change.view),
                follow_up,
            },
            ActionOutcome::Closed {
                channel_id,
                message_id,
            } => Self::Closed {
                channel_id: channel_id.to_string(),
                message_id: message_id.to_string(),
            },
        }
    }
}
