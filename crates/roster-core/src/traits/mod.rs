//! Persistence ports implemented by the infrastructure layer

mod repositories;
mod unit_of_work;

pub use repositories::{ParticipantRepository, RepoResult, RosterRepository};
pub use unit_of_work::{UnitOfWork, WorkFuture};
