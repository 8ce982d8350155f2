//! Database models - SQLx-compatible structs for PostgreSQL tables

mod participant;
mod roster;

pub use participant::ParticipantModel;
pub use roster::RosterModel;
