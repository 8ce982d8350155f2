//! Follow-up notices posted to the channel after a status change

use serde::Serialize;

use roster_core::{ParticipantStatus, ParticipantStatusChange, Snowflake};

/// Announcement the caller should post after a status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FollowUp {
    /// Someone joined and slots remain
    Joined { remaining: u32 },
    /// The last slot was taken; mention every joined member
    Filled { members: Vec<Snowflake> },
    /// Someone joined past capacity
    Overflow,
    /// A joined participant declined or canceled
    Withdrawn { remaining: u32 },
}

impl FollowUp {
    /// Derive the notice for a change to `target`.
    ///
    /// Declining or canceling only produces a notice when it freed a slot.
    pub fn for_change(target: ParticipantStatus, change: &ParticipantStatusChange) -> Option<Self> {
        let view = &change.view;
        match target {
            ParticipantStatus::Joined => Some(if !view.is_full() {
                Self::Joined {
                    remaining: view.remaining_slots(),
                }
            } else if view.extra_count() == 0 {
                Self::Filled {
                    members: view.joined_users.clone(),
                }
            } else {
                Self::Overflow
            }),
            ParticipantStatus::Declined | ParticipantStatus::Canceled => {
                (change.previous_status == Some(ParticipantStatus::Joined)).then(|| {
                    Self::Withdrawn {
                        remaining: view.remaining_slots(),
                    }
                })
            }
        }
    }
}
