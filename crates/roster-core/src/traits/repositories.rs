//! Repository traits (ports) - define the interface for data access
//!
//! Every method takes the transactional handle `Tx` handed out by a
//! [`UnitOfWork`](super::UnitOfWork), so a sequence of calls made with the same
//! handle commits or rolls back together. Implementations live in the
//! infrastructure layer.

use async_trait::async_trait;

use crate::entities::{NewRoster, Participant, ParticipantStatus, Roster, RosterId};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Roster Repository
// ============================================================================

#[async_trait]
pub trait RosterRepository<Tx: Send>: Send + Sync {
    /// Get roster by ID
    async fn get(&self, tx: &mut Tx, id: RosterId) -> RepoResult<Roster>;

    /// Get the roster bound to a rendered message.
    ///
    /// Inside a transaction the row stays locked until commit or rollback.
    async fn get_by_location(
        &self,
        tx: &mut Tx,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Roster>;

    /// Insert a roster and return its store-assigned ID
    async fn create(&self, tx: &mut Tx, roster: &NewRoster) -> RepoResult<RosterId>;

    /// Update capacity and status, refreshing `updated_at`
    async fn update(&self, tx: &mut Tx, roster: &Roster) -> RepoResult<()>;

    /// Hard delete a roster together with its participants
    async fn delete(&self, tx: &mut Tx, id: RosterId) -> RepoResult<()>;
}

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository<Tx: Send>: Send + Sync {
    /// Insert or update the `(roster_id, user_id)` row
    async fn upsert(
        &self,
        tx: &mut Tx,
        roster_id: RosterId,
        user_id: Snowflake,
        status: ParticipantStatus,
    ) -> RepoResult<()>;

    /// Find a single participant
    async fn find_one(
        &self,
        tx: &mut Tx,
        roster_id: RosterId,
        user_id: Snowflake,
    ) -> RepoResult<Option<Participant>>;

    /// All participants of a roster, oldest first
    async fn list_by_roster(&self, tx: &mut Tx, roster_id: RosterId)
        -> RepoResult<Vec<Participant>>;

    /// Remove every participant of a roster, returning how many rows went away
    async fn delete_all_by_roster(&self, tx: &mut Tx, roster_id: RosterId) -> RepoResult<u64>;
}
