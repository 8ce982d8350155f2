//! Domain entities - the roster aggregate and its participants

mod participant;
mod roster;
mod view;

pub use participant::{Participant, ParticipantStatus};
pub use roster::{NewRoster, Roster, RosterId, RosterStatus, UnknownStatus};
pub use view::{ParticipantStatusChange, RosterView};
