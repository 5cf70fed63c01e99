//! Error types for authentication and signing

/// Errors raised while building credentials or signing a request
///
/// All of these surface before any network I/O takes place.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Payload could not be serialized to JSON
    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Payload serialized to something other than a JSON object
    #[error("Payload must serialize to a JSON object, got {0}")]
    PayloadNotObject(String),

    /// Payload has no `nonce` field
    #[error("Payload is missing the `nonce` field")]
    MissingNonce,

    /// `nonce` is present but not a positive integer
    #[error("Invalid nonce: {0}")]
    InvalidNonce(String),

    /// `nonce` does not exceed the last nonce signed with these credentials
    #[error("Nonce {nonce} must be greater than the last signed nonce {last}")]
    StaleNonce {
        /// Rejected nonce
        nonce: u64,
        /// Highest nonce signed so far
        last: u64,
    },
}

impl AuthError {
    /// Check if this error is about the nonce rather than the payload shape
    pub fn is_nonce_error(&self) -> bool {
        matches!(
            self,
            Self::MissingNonce | Self::InvalidNonce(_) | Self::StaleNonce { .. }
        )
    }
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
