//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::FollowUp;

// ============================================================================
// Roster Responses
// ============================================================================

/// Roster with its participant lists and capacity figures
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub author_id: String,
    pub max_capacity: i32,
    pub status: String,
    pub joined_users: Vec<String>,
    pub declined_users: Vec<String>,
    pub remaining_slots: u32,
    pub is_full: bool,
    pub extra_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Button tokens to render on the roster message
#[derive(Debug, Clone, Serialize)]
pub struct ButtonsResponse {
    pub join: String,
    pub decline: String,
}

/// Response to opening a roster
#[derive(Debug, Clone, Serialize)]
pub struct OpenRosterResponse {
    pub roster: RosterResponse,
    pub buttons: ButtonsResponse,
}

/// Result of a dispatched button press
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InteractionResponse {
    StatusChanged {
        status: String,
        previous_status: Option<String>,
        roster: RosterResponse,
        follow_up: Option<FollowUp>,
    },
    Closed {
        channel_id: String,
        message_id: String,
    },
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
