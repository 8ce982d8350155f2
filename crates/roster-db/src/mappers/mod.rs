//! Entity to model mappers
//!
//! Conversions between domain entities (roster-core) and database models.
//! - `TryFrom<Model> for Entity`: rows carry status strings, which may not parse
//! - `RosterInsert`: prepares a new roster for insertion

mod participant;
mod roster;

pub use roster::RosterInsert;
