//! Error types for rapid_transcript
//!
//! Analysis operations never fail on ordinary input; errors only surface from
//! configuration validation and from the external collaborators (completion
//! and transcription services).

use thiserror::Error;

/// Failure reported by a text-completion collaborator
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with a non-success status
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The reply arrived but carried no usable text
    #[error("service returned an empty reply")]
    EmptyReply,
    /// Anything else the collaborator wants to report
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by a transcription collaborator
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("failed to decode audio: {0}")]
    Decode(String),
    #[error("transcription failed: {0}")]
    Processing(String),
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl InsightError {
    /// Build an [`InsightError::InvalidConfig`] from any message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        InsightError::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = InsightError::invalid_config("key_sentences must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: key_sentences must be > 0"
        );
    }

    #[test]
    fn test_service_error_converts() {
        let err: InsightError = ServiceError::Status {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, InsightError::Service(_)));
        assert_eq!(err.to_string(), "service returned status 503: overloaded");
    }
}
