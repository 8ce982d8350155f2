//! Lock-guarded state and its unit of work

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, instrument};

use roster_core::entities::{Participant, Roster, RosterId};
use roster_core::error::DomainError;
use roster_core::traits::{UnitOfWork, WorkFuture};

/// Everything the in-memory store holds
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pub(crate) last_roster_id: i64,
    pub(crate) rosters: BTreeMap<RosterId, Roster>,
    /// Kept in insertion order; upserts update rows in place
    pub(crate) participants: Vec<Participant>,
}

impl MemoryState {
    pub fn rosters(&self) -> impl Iterator<Item = &Roster> {
        self.rosters.values()
    }

    pub fn roster(&self, id: RosterId) -> Option<&Roster> {
        self.rosters.get(&id)
    }

    pub fn participants_of(&self, roster_id: RosterId) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(move |p| p.roster_id == roster_id)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Shared in-memory store. Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed state
    pub async fn snapshot(&self) -> MemoryState {
        self.state.lock().await.clone()
    }
}

/// Handle for one in-memory unit of work.
///
/// Holds the store lock, so units of work run one at a time. Dropping the
/// handle without [`commit`](Self::commit) discards every staged change.
pub struct MemoryTx {
    guard: OwnedMutexGuard<MemoryState>,
    pub(crate) staged: MemoryState,
}

impl MemoryTx {
    async fn begin(state: Arc<Mutex<MemoryState>>) -> Self {
        let guard = state.lock_owned().await;
        let staged = guard.clone();
        Self { guard, staged }
    }

    /// Publish the staged state
    pub fn commit(mut self) {
        *self.guard = std::mem::take(&mut self.staged);
    }
}

impl std::fmt::Debug for MemoryTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTx")
            .field("staged", &self.staged)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UnitOfWork for MemoryStore {
    type Tx = MemoryTx;

    #[instrument(skip_all)]
    async fn run<T, E, F>(&self, work: F) -> Result<T, E>
    where
        T: Send,
        E: From<DomainError> + Send,
        F: for<'t> FnOnce(&'t mut Self::Tx) -> WorkFuture<'t, T, E> + Send,
    {
        let mut tx = MemoryTx::begin(Arc::clone(&self.state)).await;

        let result = work(&mut tx).await;
        if result.is_ok() {
            tx.commit();
        } else {
            debug!("Discarding staged changes");
        }

        result
    }
}
