//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique snowflakes within one test run
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a snowflake unlikely to collide with other runs against a shared database
pub fn unique_snowflake() -> String {
    let run = i64::from(std::process::id()) << 32;
    (run + COUNTER.fetch_add(1, Ordering::SeqCst)).to_string()
}

/// Open roster request
#[derive(Debug, Clone, Serialize)]
pub struct OpenRosterRequest {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub author_id: String,
    pub capacity: i32,
}

impl OpenRosterRequest {
    pub fn unique(capacity: i32) -> Self {
        Self {
            guild_id: unique_snowflake(),
            channel_id: unique_snowflake(),
            message_id: unique_snowflake(),
            author_id: unique_snowflake(),
            capacity,
        }
    }

    /// Path of the view endpoint for this roster
    pub fn roster_path(&self) -> String {
        format!(
            "/api/v1/channels/{}/messages/{}/roster",
            self.channel_id, self.message_id
        )
    }

    /// A button press on this roster's message
    pub fn press(&self, custom_id: &str, actor_id: &str) -> InteractionRequest {
        self.press_on(custom_id, &self.message_id, actor_id)
    }

    /// A button press on another message in the same channel, such as a control panel
    pub fn press_on(&self, custom_id: &str, message_id: &str, actor_id: &str) -> InteractionRequest {
        InteractionRequest {
            custom_id: custom_id.to_string(),
            channel_id: self.channel_id.clone(),
            message_id: message_id.to_string(),
            actor_id: actor_id.to_string(),
        }
    }
}

/// Button press request
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRequest {
    pub custom_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub actor_id: String,
}

/// Roster response
#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    pub id: String,
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
}

/// Button tokens
#[derive(Debug, Deserialize)]
pub struct ButtonsResponse {
    pub join: String,
    pub decline: String,
}

/// Open roster response
#[derive(Debug, Deserialize)]
pub struct OpenRosterResponse {
    pub roster: RosterResponse,
    pub buttons: ButtonsResponse,
}

/// Button press outcome
#[derive(Debug, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InteractionResponse {
    StatusChanged {
        status: String,
        previous_status: Option<String>,
        roster: RosterResponse,
        follow_up: Option<serde_json::Value>,
    },
    Closed {
        channel_id: String,
        message_id: String,
    },
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// The control panel token attached to a refused button press
    pub fn custom_id(&self) -> Option<&str> {
        self.details.as_ref()?.get("custom_id")?.as_str()
    }
}
