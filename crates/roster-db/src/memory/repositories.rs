//! In-memory repositories operating on the staged state of a [`MemoryTx`]

use async_trait::async_trait;
use chrono::Utc;

use roster_core::entities::{NewRoster, Participant, ParticipantStatus, Roster, RosterId};
use roster_core::error::DomainError;
use roster_core::traits::{ParticipantRepository, RepoResult, RosterRepository};
use roster_core::value_objects::Snowflake;

use super::store::MemoryTx;

/// In-memory implementation of RosterRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryRosterRepository;

impl MemoryRosterRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RosterRepository<MemoryTx> for MemoryRosterRepository {
    async fn get(&self, tx: &mut MemoryTx, id: RosterId) -> RepoResult<Roster> {
        tx.staged
            .rosters
            .get(&id)
            .cloned()
            .ok_or(DomainError::RosterNotFound(id))
    }

    async fn get_by_location(
        &self,
        tx: &mut MemoryTx,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<Roster> {
        tx.staged
            .rosters
            .values()
            .find(|r| r.channel_id == channel_id && r.message_id == message_id)
            .cloned()
            .ok_or(DomainError::RosterNotFoundAt {
                channel: channel_id,
                message: message_id,
            })
    }

    async fn create(&self, tx: &mut MemoryTx, roster: &NewRoster) -> RepoResult<RosterId> {
        let state = &mut tx.staged;

        let taken = state
            .rosters
            .values()
            .any(|r| r.channel_id == roster.channel_id && r.message_id == roster.message_id);
        if taken {
            return Err(DomainError::RosterAlreadyExists);
        }

        state.last_roster_id += 1;
        let id = RosterId::new(state.last_roster_id);
        state.rosters.insert(id, roster.clone().into_roster(id));

        Ok(id)
    }

    async fn update(&self, tx: &mut MemoryTx, roster: &Roster) -> RepoResult<()> {
        let stored = tx
            .staged
            .rosters
            .get_mut(&roster.id)
            .ok_or(DomainError::RosterNotFound(roster.id))?;

        stored.max_capacity = roster.max_capacity;
        stored.status = roster.status;
        stored.updated_at = Some(Utc::now());

        Ok(())
    }

    async fn delete(&self, tx: &mut MemoryTx, id: RosterId) -> RepoResult<()> {
        let state = &mut tx.staged;

        if state.rosters.remove(&id).is_none() {
            return Err(DomainError::RosterNotFound(id));
        }
        state.participants.retain(|p| p.roster_id != id);

        Ok(())
    }
}

/// In-memory implementation of ParticipantRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryParticipantRepository;

impl MemoryParticipantRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ParticipantRepository<MemoryTx> for MemoryParticipantRepository {
    async fn upsert(
        &self,
        tx: &mut MemoryTx,
        roster_id: RosterId,
        user_id: Snowflake,
        status: ParticipantStatus,
    ) -> RepoResult<()> {
        let state = &mut tx.staged;

        if !state.rosters.contains_key(&roster_id) {
            return Err(DomainError::RosterNotFound(roster_id));
        }

        let now = Utc::now();
        match state
            .participants
            .iter_mut()
            .find(|p| p.roster_id == roster_id && p.user_id == user_id)
        {
            Some(existing) => {
                existing.status = status;
                existing.updated_at = Some(now);
            }
            None => state.participants.push(Participant {
                roster_id,
                user_id,
                status,
                created_at: now,
                updated_at: Some(now),
            }),
        }

        Ok(())
    }

    async fn find_one(
        &self,
        tx: &mut MemoryTx,
        roster_id: RosterId,
        user_id: Snowflake,
    ) -> RepoResult<Option<Participant>> {
        Ok(tx
            .staged
            .participants
            .iter()
            .find(|p| p.roster_id == roster_id && p.user_id == user_id)
            .cloned())
    }

    async fn list_by_roster(
        &self,
        tx: &mut MemoryTx,
        roster_id: RosterId,
    ) -> RepoResult<Vec<Participant>> {
        Ok(tx.staged.participants_of(roster_id).cloned().collect())
    }

    async fn delete_all_by_roster(&self, tx: &mut MemoryTx, roster_id: RosterId) -> RepoResult<u64> {
        let participants = &mut tx.staged.participants;

        let before = participants.len();
        participants.retain(|p| p.roster_id != roster_id);

        Ok((before - participants.len()) as u64)
    }
}
