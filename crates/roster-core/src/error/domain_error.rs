//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::RosterId;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Roster not found: {0}")]
    RosterNotFound(RosterId),

    #[error("No roster on message {message} in channel {channel}")]
    RosterNotFoundAt {
        channel: Snowflake,
        message: Snowflake,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(i32),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("The roster author cannot change their own participation")]
    AuthorCannotAct,

    #[error("Only the roster author can close it")]
    NotAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already joined this roster")]
    AlreadyJoined,

    #[error("Already declined this roster")]
    AlreadyDeclined,

    #[error("A roster already exists on this message")]
    RosterAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RosterNotFound(_) | Self::RosterNotFoundAt { .. } => "UNKNOWN_ROSTER",

            // Validation
            Self::InvalidCapacity(_) => "INVALID_CAPACITY",

            // Authorization
            Self::AuthorCannotAct => "AUTHOR_CANNOT_ACT",
            Self::NotAuthor => "NOT_ROSTER_AUTHOR",

            // Conflict
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::AlreadyDeclined => "ALREADY_DECLINED",
            Self::RosterAlreadyExists => "ROSTER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RosterNotFound(_) | Self::RosterNotFoundAt { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCapacity(_))
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::AuthorCannotAct | Self::NotAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyJoined | Self::AlreadyDeclined | Self::RosterAlreadyExists
        )
    }

    /// Check if this came from the store rather than a business rule
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
