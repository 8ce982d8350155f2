//! # roster-core
//!
//! Domain layer for capacity-bounded recruitment rosters: the aggregate and its
//! participants, the derived view, domain errors, and the persistence ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    NewRoster, Participant, ParticipantStatus, ParticipantStatusChange, Roster, RosterId,
    RosterStatus, RosterView, UnknownStatus,
};
pub use error::DomainError;
pub use traits::{
    ParticipantRepository, RepoResult, RosterRepository, UnitOfWork, WorkFuture,
};
pub use value_objects::{Snowflake, SnowflakeParseError};
