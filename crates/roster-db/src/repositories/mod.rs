//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.
//! Repositories hold no connection of their own; every statement runs on the
//! [`PgExecutor`](crate::PgExecutor) passed in by the caller.

mod error;
mod participant;
mod roster;

pub(crate) use error::map_db_error;
pub use participant::PgParticipantRepository;
pub use roster::PgRosterRepository;
