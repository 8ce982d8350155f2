//! Roster engine interface

use async_trait::async_trait;

use roster_core::{ParticipantStatus, ParticipantStatusChange, RosterView, Snowflake};

use super::actions::RosterAction;
use super::error::ServiceResult;
use super::follow_up::FollowUp;

/// What a dispatched button press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    StatusChanged {
        status: ParticipantStatus,
        change: ParticipantStatusChange,
        follow_up: Option<FollowUp>,
    },
    Closed {
        channel_id: Snowflake,
        message_id: Snowflake,
    },
}

/// Recruitment operations, keyed by the message a roster is rendered on.
///
/// Each call is one unit of work: it either applies completely or not at all.
#[async_trait]
pub trait RosterEngine: Send + Sync {
    /// Open a roster on `message_id` with its author joined
    async fn open(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        capacity: i32,
        author_id: Snowflake,
    ) -> ServiceResult<RosterView>;

    async fn join(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange>;

    async fn decline(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange>;

    async fn cancel(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange>;

    /// Delete the roster and its participants; only the author may close
    async fn close(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()>;

    async fn view(&self, channel_id: Snowflake, message_id: Snowflake)
        -> ServiceResult<RosterView>;

    /// Route a button press made on `origin_message_id` to its operation
    async fn dispatch(
        &self,
        channel_id: Snowflake,
        origin_message_id: Snowflake,
        actor_id: Snowflake,
        action: RosterAction,
    ) -> ServiceResult<ActionOutcome> {
        let message_id = action.target_message(origin_message_id);

        let (status, change) = match action {
            RosterAction::Join => (
                ParticipantStatus::Joined,
                self.join(channel_id, message_id, actor_id).await?,
            ),
            RosterAction::Decline => (
                ParticipantStatus::Declined,
                self.decline(channel_id, message_id, actor_id).await?,
            ),
            RosterAction::Cancel { .. } => (
                ParticipantStatus::Canceled,
                self.cancel(channel_id, message_id, actor_id).await?,
            ),
            RosterAction::Close { .. } => {
                self.close(channel_id, message_id, actor_id).await?;
                return Ok(ActionOutcome::Closed {
                    channel_id,
                    message_id,
                });
            }
        };

        let follow_up = FollowUp::for_change(status, &change);
        Ok(ActionOutcome::StatusChanged {
            status,
            change,
            follow_up,
        })
    }
}
