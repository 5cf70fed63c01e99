//! Authentication primitives for the CoinSpot API v2
//!
//! CoinSpot authenticates private requests with two headers: `key`, the
//! public API key, and `sign`, a lowercase hex HMAC-SHA512 of the exact JSON
//! request body keyed by the private API secret. Every body carries a
//! strictly increasing `nonce`.
//!
//! # Example
//!
//! ```
//! use coinspot_auth::{Credentials, Nonce, Payload, RequestSigner};
//!
//! # fn example() -> Result<(), coinspot_auth::AuthError> {
//! let creds = Credentials::new("my-api-key", "my-api-secret")?;
//! let signer = RequestSigner::new(creds);
//!
//! let payload = Payload::new(Nonce::new(1)).with_field("cointype", "BTC")?;
//! let signed = signer.sign(&payload)?;
//!
//! assert_eq!(signed.body(), r#"{"nonce":1,"cointype":"BTC"}"#);
//! assert_eq!(signed.sign().len(), 128);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod credentials;
mod error;
mod nonce;
mod payload;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::Nonce;
pub use payload::Payload;
pub use signer::{RequestSigner, SignedPayload};
