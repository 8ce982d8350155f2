//! Business logic services
//!
//! The roster engine and the pieces an interaction source needs around it:
//! decoding button tokens into actions and deriving follow-up notices.

pub mod actions;
pub mod engine;
pub mod error;
pub mod follow_up;
pub mod recruitment;

pub use actions::{control_panel_for, roster_buttons, RosterAction, RosterButtons};
pub use engine::{ActionOutcome, RosterEngine};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use follow_up::FollowUp;
pub use recruitment::RecruitmentService;
