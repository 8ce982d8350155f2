//! # roster-service
//!
//! Application layer: the roster engine, the button actions that drive it,
//! follow-up notices, and request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    control_panel_for, roster_buttons, ActionOutcome, ErrorKind, FollowUp, RecruitmentService,
    RosterAction, RosterButtons, RosterEngine, ServiceError, ServiceResult,
};
