//! Roster view - read model projected from the authoritative participant list

use serde::Serialize;

use super::participant::{Participant, ParticipantStatus};
use super::roster::Roster;
use crate::value_objects::Snowflake;

/// Roster snapshot plus joined and declined users, each in insertion order.
///
/// The author counts as joined but not against capacity, hence the `+ 1`
/// in the derived quantities below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    pub roster: Roster,
    pub joined_users: Vec<Snowflake>,
    pub declined_users: Vec<Snowflake>,
}

impl RosterView {
    /// Project a view from participants already sorted by creation time.
    /// Canceled participants appear in neither list.
    pub fn project(roster: Roster, participants: &[Participant]) -> Self {
        let mut joined_users = Vec::new();
        let mut declined_users = Vec::new();

        for participant in participants {
            match participant.status {
                ParticipantStatus::Joined => joined_users.push(participant.user_id),
                ParticipantStatus::Declined => declined_users.push(participant.user_id),
                ParticipantStatus::Canceled => {}
            }
        }

        Self {
            roster,
            joined_users,
            declined_users,
        }
    }

    fn joined_count(&self) -> i64 {
        self.joined_users.len() as i64
    }

    /// Open slots: `max(max_capacity - joined + 1, 0)`
    pub fn remaining_slots(&self) -> u32 {
        let remaining = i64::from(self.roster.max_capacity) - self.joined_count() + 1;
        remaining.max(0) as u32
    }

    /// `max_capacity <= joined - 1`
    pub fn is_full(&self) -> bool {
        i64::from(self.roster.max_capacity) <= self.joined_count() - 1
    }

    /// Joiners past capacity: `max(joined - max_capacity - 1, 0)`
    pub fn extra_count(&self) -> u32 {
        let extra = self.joined_count() - i64::from(self.roster.max_capacity) - 1;
        extra.max(0) as u32
    }
}

/// Result of a participant status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantStatusChange {
    pub view: RosterView,
    /// Status before the change; `None` when the user had no row
    pub previous_status: Option<ParticipantStatus>,
}
