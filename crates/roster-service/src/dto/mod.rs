//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting engine results to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{InteractionRequest, OpenRosterRequest};
pub use responses::{
    ButtonsResponse, HealthResponse, InteractionResponse, OpenRosterResponse, RosterResponse,
};
