//! Service layer error types
//!
//! Provides a unified error type for all engine operations.

use std::time::Duration;

use roster_common::CodecError;
use roster_core::DomainError;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Button token could not be read or written
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The call did not finish within its deadline; its unit of work was rolled back
    #[error("Operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Coarse classification callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Forbidden,
    Validation,
    StoreFailure,
    MalformedToken,
    SizeExceeded,
    Timeout,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    ErrorKind::NotFound
                } else if e.is_conflict() {
                    ErrorKind::Conflict
                } else if e.is_forbidden() {
                    ErrorKind::Forbidden
                } else if e.is_validation() {
                    ErrorKind::Validation
                } else {
                    ErrorKind::StoreFailure
                }
            }
            Self::Codec(CodecError::MalformedToken(_)) => ErrorKind::MalformedToken,
            Self::Codec(CodecError::SizeExceeded { .. }) => ErrorKind::SizeExceeded,
            Self::Timeout(_) => ErrorKind::Timeout,
        }
    }

    /// Outcomes of normal use rather than faults; not logged as errors
    pub fn is_expected(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Conflict | ErrorKind::Forbidden | ErrorKind::NotFound
        )
    }

    /// The domain error, if this is one
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Forbidden => 403,
            ErrorKind::Validation | ErrorKind::MalformedToken | ErrorKind::SizeExceeded => 400,
            ErrorKind::StoreFailure => 500,
            ErrorKind::Timeout => 504,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Codec(CodecError::MalformedToken(_)) => "MALFORMED_TOKEN",
            Self::Codec(CodecError::SizeExceeded { .. }) => "TOKEN_TOO_LONG",
            Self::Timeout(_) => "TIMEOUT",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use roster_core::{RosterId, Snowflake};

    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::from(DomainError::RosterNotFoundAt {
            channel: Snowflake::new(1),
            message: Snowflake::new(2),
        });
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_ROSTER");
        assert!(err.is_expected());
    }

    #[test]
    fn test_conflict_and_forbidden_are_expected() {
        for err in [
            DomainError::AlreadyJoined,
            DomainError::AlreadyDeclined,
            DomainError::RosterAlreadyExists,
            DomainError::AuthorCannotAct,
            DomainError::NotAuthor,
        ] {
            assert!(ServiceError::from(err).is_expected());
        }
    }

    #[test]
    fn test_store_failure_is_not_expected() {
        let err = ServiceError::from(DomainError::DatabaseError("connection reset".to_string()));
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_expected());

        let err = ServiceError::from(DomainError::RosterNotFound(RosterId::new(3)));
        assert!(err.is_expected());
    }

    #[test]
    fn test_codec_errors() {
        let err = ServiceError::from(CodecError::MalformedToken("missing colon".to_string()));
        assert_eq!(err.kind(), ErrorKind::MalformedToken);
        assert_eq!(err.status_code(), 400);

        let err = ServiceError::from(CodecError::SizeExceeded { len: 120, max: 100 });
        assert_eq!(err.error_code(), "TOKEN_TOO_LONG");
        assert!(!err.is_expected());
    }

    #[test]
    fn test_timeout_error() {
        let err = ServiceError::Timeout(Duration::from_secs(5));
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(err.status_code(), 504);
        assert_eq!(err.to_string(), "Operation timed out after 5000ms");
    }
}
