//! Recruitment service
//!
//! Opens rosters, records participant answers, and closes rosters. Every
//! operation runs as a single unit of work bounded by the configured deadline.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use roster_common::EngineConfig;
use roster_core::{
    DomainError, NewRoster, ParticipantRepository, ParticipantStatus, ParticipantStatusChange,
    RosterRepository, RosterView, Snowflake, UnitOfWork, WorkFuture,
};
use roster_db::{
    MemoryParticipantRepository, MemoryRosterRepository, MemoryStore, PgParticipantRepository,
    PgPool, PgRosterRepository, PgUnitOfWork,
};

use super::engine::RosterEngine;
use super::error::{ErrorKind, ServiceError, ServiceResult};

/// Roster engine over any unit-of-work implementation
pub struct RecruitmentService<U: UnitOfWork> {
    uow: Arc<U>,
    rosters: Arc<dyn RosterRepository<U::Tx>>,
    participants: Arc<dyn ParticipantRepository<U::Tx>>,
    config: EngineConfig,
}

impl<U: UnitOfWork> Clone for RecruitmentService<U> {
    fn clone(&self) -> Self {
        Self {
            uow: Arc::clone(&self.uow),
            rosters: Arc::clone(&self.rosters),
            participants: Arc::clone(&self.participants),
            config: self.config,
        }
    }
}

impl RecruitmentService<MemoryStore> {
    /// Engine over an in-memory store
    pub fn in_memory(store: MemoryStore, config: EngineConfig) -> Self {
        Self::new(
            Arc::new(store),
            Arc::new(MemoryRosterRepository::new()),
            Arc::new(MemoryParticipantRepository::new()),
            config,
        )
    }
}

impl RecruitmentService<PgUnitOfWork> {
    /// Engine over PostgreSQL
    pub fn postgres(pool: PgPool, config: EngineConfig) -> Self {
        Self::new(
            Arc::new(PgUnitOfWork::new(pool)),
            Arc::new(PgRosterRepository::new()),
            Arc::new(PgParticipantRepository::new()),
            config,
        )
    }
}

impl<U: UnitOfWork> RecruitmentService<U> {
    pub fn new(
        uow: Arc<U>,
        rosters: Arc<dyn RosterRepository<U::Tx>>,
        participants: Arc<dyn ParticipantRepository<U::Tx>>,
        config: EngineConfig,
    ) -> Self {
        Self {
            uow,
            rosters,
            participants,
            config,
        }
    }

    pub fn unit_of_work(&self) -> &U {
        &self.uow
    }

    /// Run `work` as one unit of work under the call deadline.
    ///
    /// On expiry the unit of work is dropped, which rolls it back.
    async fn transact<T, F>(&self, operation: &'static str, work: F) -> ServiceResult<T>
    where
        T: Send,
        F: for<'t> FnOnce(&'t mut U::Tx) -> WorkFuture<'t, T, ServiceError> + Send,
    {
        let deadline = self.config.call_timeout;
        let result = match tokio::time::timeout(deadline, self.uow.run(work)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout(deadline)),
        };

        if let Err(err) = &result {
            log_failure(operation, err);
        }
        result
    }

    /// Shared path for join, decline and cancel
    async fn change_status(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
        target: ParticipantStatus,
    ) -> ServiceResult<ParticipantStatusChange> {
        let rosters = Arc::clone(&self.rosters);
        let participants = Arc::clone(&self.participants);

        let change = self
            .transact(target.as_str(), move |tx| {
                Box::pin(async move {
                    let roster = rosters.get_by_location(tx, channel_id, message_id).await?;
                    if roster.is_author(actor_id) {
                        return Err(ServiceError::from(DomainError::AuthorCannotAct));
                    }

                    let previous_status = participants
                        .find_one(tx, roster.id, actor_id)
                        .await?
                        .map(|participant| participant.status);
                    ParticipantStatus::guard_transition(previous_status, target)?;

                    participants.upsert(tx, roster.id, actor_id, target).await?;
                    let listed = participants.list_by_roster(tx, roster.id).await?;

                    Ok::<_, ServiceError>(ParticipantStatusChange {
                        view: RosterView::project(roster, &listed),
                        previous_status,
                    })
                })
            })
            .await?;

        info!(
            roster_id = %change.view.roster.id,
            actor_id = %actor_id,
            status = target.as_str(),
            previous = ?change.previous_status,
            "Participant status changed"
        );
        Ok(change)
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> RosterEngine for RecruitmentService<U> {
    #[instrument(skip(self))]
    async fn open(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        capacity: i32,
        author_id: Snowflake,
    ) -> ServiceResult<RosterView> {
        if capacity < 1 {
            let err = ServiceError::from(DomainError::InvalidCapacity(capacity));
            log_failure("open", &err);
            return Err(err);
        }

        let new = NewRoster::open(guild_id, channel_id, message_id, author_id, capacity);
        let rosters = Arc::clone(&self.rosters);
        let participants = Arc::clone(&self.participants);

        let view = self
            .transact("open", move |tx| {
                Box::pin(async move {
                    let id = rosters.create(tx, &new).await?;
                    participants
                        .upsert(tx, id, new.author_id, ParticipantStatus::Joined)
                        .await?;

                    let roster = rosters.get(tx, id).await?;
                    let listed = participants.list_by_roster(tx, id).await?;
                    Ok::<_, ServiceError>(RosterView::project(roster, &listed))
                })
            })
            .await?;

        info!(roster_id = %view.roster.id, capacity, "Roster opened");
        Ok(view)
    }

    #[instrument(skip(self))]
    async fn join(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange> {
        self.change_status(channel_id, message_id, actor_id, ParticipantStatus::Joined)
            .await
    }

    #[instrument(skip(self))]
    async fn decline(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange> {
        self.change_status(channel_id, message_id, actor_id, ParticipantStatus::Declined)
            .await
    }

    #[instrument(skip(self))]
    async fn cancel(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ParticipantStatusChange> {
        self.change_status(channel_id, message_id, actor_id, ParticipantStatus::Canceled)
            .await
    }

    #[instrument(skip(self))]
    async fn close(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let rosters = Arc::clone(&self.rosters);

        let roster_id = self
            .transact("close", move |tx| {
                Box::pin(async move {
                    let roster = rosters.get_by_location(tx, channel_id, message_id).await?;
                    if !roster.is_author(actor_id) {
                        return Err(ServiceError::from(DomainError::NotAuthor));
                    }

                    rosters.delete(tx, roster.id).await?;
                    Ok::<_, ServiceError>(roster.id)
                })
            })
            .await?;

        info!(roster_id = %roster_id, "Roster closed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn view(&self, channel_id: Snowflake, message_id: Snowflake) -> ServiceResult<RosterView> {
        let rosters = Arc::clone(&self.rosters);
        let participants = Arc::clone(&self.participants);

        self.transact("view", move |tx| {
            Box::pin(async move {
                let roster = rosters.get_by_location(tx, channel_id, message_id).await?;
                let listed = participants.list_by_roster(tx, roster.id).await?;
                Ok::<_, ServiceError>(RosterView::project(roster, &listed))
            })
        })
        .await
    }
}

fn log_failure(operation: &str, err: &ServiceError) {
    match err.kind() {
        ErrorKind::NotFound => info!(operation, error = %err, "Roster not found"),
        ErrorKind::Timeout => warn!(operation, error = %err, "Roster operation timed out"),
        ErrorKind::StoreFailure => error!(operation, error = %err, "Roster operation failed"),
        _ => debug!(operation, code = err.error_code(), "Roster operation rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_send_sync() {
        assert_send_sync::<RecruitmentService<MemoryStore>>();
        assert_send_sync::<RecruitmentService<PgUnitOfWork>>();
    }

    #[test]
    fn test_engine_is_object_safe() {
        let service = RecruitmentService::in_memory(MemoryStore::new(), EngineConfig::default());
        let engine: Arc<dyn RosterEngine> = Arc::new(service);
        drop(engine);
    }
}
