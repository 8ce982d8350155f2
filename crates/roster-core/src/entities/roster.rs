//! Roster entity - a capacity-bounded recruitment bound to one rendered message

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Store-assigned roster identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(i64);

impl RosterId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RosterId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Error returned when a stored status string has no matching variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0:?}")]
pub struct UnknownStatus(pub String);

/// Roster lifecycle. A closed roster is deleted, so `Closed` is only ever
/// observed on rows written by other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterStatus {
    Opened,
    Closed,
}

impl RosterStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RosterStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opened" => Ok(Self::Opened),
            "closed" => Ok(Self::Closed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Roster aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    pub id: RosterId,
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,
    pub max_capacity: i32,
    pub status: RosterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Roster {
    /// Check if the user opened this roster
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == RosterStatus::Opened
    }
}

/// Roster fields known before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoster {
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,
    pub max_capacity: i32,
    pub status: RosterStatus,
    pub created_at: DateTime<Utc>,
}

impl NewRoster {
    /// Describe a freshly opened roster
    pub fn open(
        guild_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        author_id: Snowflake,
        max_capacity: i32,
    ) -> Self {
        Self {
            guild_id,
            channel_id,
            message_id,
            author_id,
            max_capacity,
            status: RosterStatus::Opened,
            created_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_roster(self, id: RosterId) -> Roster {
        Roster {
            id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            message_id: self.message_id,
            author_id: self.author_id,
            max_capacity: self.max_capacity,
            status: self.status,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
