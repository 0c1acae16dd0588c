// ============================================================================
// ERRORS - normalized failures of the resource client
// ============================================================================

use thiserror::Error;

/// Failure of a single resource client call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered 401; the session has already been cleared
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("invalid or expired credential"))]
    Unauthorized { message: Option<String> },

    /// The service answered with an error status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Remote { status: u16, message: Option<String> },

    /// The request body could not be serialized
    #[error("Serialization error: {0}")]
    Encode(String),

    /// Success status, but the body did not decode
    #[error("Parse error: {0}")]
    Decode(String),

    /// Rejected locally, before or after the round trip
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Message supplied by the remote service, if it sent one
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Remote { message, .. } | ApiError::Unauthorized { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text written to a store's error field.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Invalid(message) => message.clone(),
            other => other
                .remote_message()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
        }
    }
}

/// Failure of the key-value side store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}
