//! Participant entity - a user's current standing on a roster

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::roster::{RosterId, UnknownStatus};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Participant status. Any status may follow any other while the roster is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Joined,
    Declined,
    Canceled,
}

impl ParticipantStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Joined => "joined",
            Self::Declined => "declined",
            Self::Canceled => "canceled",
        }
    }

    /// Reject a change that would leave the status where it already is.
    ///
    /// Only `Joined` and `Declined` are guarded; canceling twice is allowed.
    pub fn guard_transition(previous: Option<Self>, target: Self) -> Result<(), DomainError> {
        match (previous, target) {
            (Some(Self::Joined), Self::Joined) => Err(DomainError::AlreadyJoined),
            (Some(Self::Declined), Self::Declined) => Err(DomainError::AlreadyDeclined),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "joined" => Ok(Self::Joined),
            "declined" => Ok(Self::Declined),
            "canceled" => Ok(Self::Canceled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Participant record, keyed by `(roster_id, user_id)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub roster_id: RosterId,
    pub user_id: Snowflake,
    pub status: ParticipantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
