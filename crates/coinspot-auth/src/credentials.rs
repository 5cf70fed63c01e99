//! API credentials for CoinSpot private endpoints
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the public API key
pub const API_KEY_ENV: &str = "COINSPOT_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "COINSPOT_API_SECRET";

/// API key pair for authenticated requests
///
/// The public key travels in the `key` header. The secret never leaves the
/// process; it is only used as the HMAC key and is zeroized on drop.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret, used verbatim as UTF-8 HMAC key
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from a public API key and its secret
    ///
    /// # Errors
    /// `InvalidCredentials` if either part is empty, or if the public key
    /// contains characters that cannot be sent as an HTTP header value.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if !api_key.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(AuthError::InvalidCredentials(
                "API key must be visible ASCII".to_string(),
            ));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINSPOT_API_KEY` and `COINSPOT_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the public API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the lowercase hex HMAC-SHA512 of `message`, keyed by the secret
    ///
    /// This is a pure function of the secret and the message bytes.
    pub fn sign(&self, message: &str) -> AuthResult<String> {
        let mut mac = HmacSha512::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(message.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
