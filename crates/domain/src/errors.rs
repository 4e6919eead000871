use thiserror::Error;

use crate::envelope::{EnvelopeError, DEFAULT_FAILURE_MESSAGE};

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown menu type: {0}")]
    UnknownMenuType(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Auth resolution failed: {0}")]
    AuthResolution(String),
}

/// Normalised failure of a single fetch through the read-through cache.
///
/// Cloneable so the same error can be handed to the caller, published on the
/// per-key load state and kept in the refresh-error sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

impl FetchError {
    /// Status code to report for this failure: the application code carried
    /// by the envelope, or 500 for anything else.
    pub fn code(&self) -> i64 {
        match self {
            FetchError::Envelope(EnvelopeError::ApplicationError { code, .. }) => *code,
            _ => 500,
        }
    }

    /// Human-readable message suitable for a failure envelope.
    pub fn message(&self) -> String {
        match self {
            FetchError::Envelope(EnvelopeError::ApplicationError { message, .. }) => {
                message.clone()
            }
            FetchError::Envelope(EnvelopeError::Malformed(detail)) => {
                format!("{DEFAULT_FAILURE_MESSAGE}: {detail}")
            }
            FetchError::Transport(detail) => format!("{DEFAULT_FAILURE_MESSAGE}: {detail}"),
        }
    }
}

impl From<DomainError> for FetchError {
    fn from(err: DomainError) -> Self {
        FetchError::Transport(err.to_string())
    }
}
