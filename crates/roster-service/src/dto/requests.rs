//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Snowflake fields accept either a JSON string or a number.

use serde::Deserialize;
use validator::Validate;

use roster_core::Snowflake;

/// Open a roster on an already-posted message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OpenRosterRequest {
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
}

/// A button press relayed from the chat platform
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InteractionRequest {
    #[validate(length(min = 1, message = "custom_id must not be empty"))]
    pub custom_id: String,

    pub channel_id: Snowflake,

    /// Message the pressed button is attached to
    pub message_id: Snowflake,

    pub actor_id: Snowflake,
}
