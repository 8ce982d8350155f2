//! In-memory store
//!
//! Implements the same ports as the PostgreSQL store, for tests and local runs.
//! A unit of work holds the store lock for its whole duration and mutates a
//! staged copy of the state; the copy replaces the shared state only on commit.

mod repositories;
mod store;

pub use repositories::{MemoryParticipantRepository, MemoryRosterRepository};
pub use store::{MemoryState, MemoryStore, MemoryTx};
