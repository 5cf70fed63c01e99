//! Request signer for authenticated endpoints
//!
//! Signing procedure:
//! 1. Serialize the payload to compact JSON, keys in insertion order
//! 2. HMAC-SHA512(api_secret, body)
//! 3. Lowercase hex encode the digest
//!
//! The resulting `body` must be sent byte-for-byte as the request body.

use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// A body and the signature computed over it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    nonce: u64,
    body: String,
    sign: String,
}

impl SignedPayload {
    /// Nonce carried by the body
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Exact JSON body that was signed
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Lowercase hex HMAC-SHA512 of [`body`](Self::body)
    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Take the body, dropping the rest
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Signs request payloads with one credential pair
///
/// The signer owns the credentials and remembers the highest nonce it has
/// signed. A payload whose nonce does not exceed it is rejected, never
/// rewritten.
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
    last_nonce: AtomicU64,
}

impl RequestSigner {
    /// Create a new request signer
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            last_nonce: AtomicU64::new(0),
        }
    }

    /// Get the public API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Highest nonce signed so far (0 if none)
    pub fn last_nonce(&self) -> u64 {
        self.last_nonce.load(Ordering::SeqCst)
    }

    /// Serialize and sign a payload
    ///
    /// `payload` may be a [`Payload`](crate::Payload) or any type that
    /// serializes to a JSON object with a positive integer `nonce`.
    ///
    /// # Errors
    /// Serialization and nonce precondition failures, see [`AuthError`].
    pub fn sign<T: Serialize + ?Sized>(&self, payload: &T) -> AuthResult<SignedPayload> {
        let fields = match serde_json::to_value(payload)? {
            Value::Object(fields) => fields,
            other => return Err(AuthError::PayloadNotObject(other.to_string())),
        };

        let nonce = match fields.get("nonce") {
            None => return Err(AuthError::MissingNonce),
            Some(value) => match value.as_u64() {
                Some(n) if n > 0 => n,
                _ => return Err(AuthError::InvalidNonce(value.to_string())),
            },
        };

        let body = serde_json::to_string(&fields)?;
        let sign = self.credentials.sign(&body)?;

        // Only reserve the nonce once the payload is known to be signable
        let last = self.last_nonce.fetch_max(nonce, Ordering::SeqCst);
        if nonce <= last {
            return Err(AuthError::StaleNonce { nonce, last });
        }

        trace!(nonce, "Signed payload");

        Ok(SignedPayload { nonce, body, sign })
    }
}

impl From<Credentials> for RequestSigner {
    fn from(credentials: Credentials) -> Self {
        Self::new(credentials)
    }
}
