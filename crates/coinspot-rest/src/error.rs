//! Error types for REST API operations

use coinspot_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// A non-2xx HTTP status is not an error here: responses are returned to the
/// caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP transport failed (DNS, connect, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Signing precondition failed before the request was sent
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl RestError {
    /// Check if the request reached the transport layer and failed there
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if the error was raised locally, before any network I/O
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Auth(_) | Self::AuthRequired | Self::InvalidConfig(_) | Self::InvalidHeader(_)
        )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
