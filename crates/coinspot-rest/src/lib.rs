//! REST API client for the CoinSpot cryptocurrency exchange
//!
//! This crate exposes CoinSpot's API v2 as typed method calls. Each call
//! issues exactly one HTTP request and returns the raw
//! [`reqwest::Response`]; decoding the `{"status": ..., "message": ...}`
//! envelope is left to the caller.
//!
//! # Features
//!
//! - **Public market data**: latest, buy and sell prices; open and completed orders
//! - **Read-only API**: signed status check, plus a generic signed POST
//! - **Full-access API**: same signing, different base URL
//!
//! # Authentication
//!
//! Authenticated endpoints require an API key pair. Request bodies are signed
//! with HMAC-SHA512 (see [`coinspot_auth`]).
//!
//! # Example
//!
//! ```no_run
//! use coinspot_rest::{CoinspotClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CoinspotClient::new()?;
//!     let response = client.latest_coin_price("BTC").await?;
//!     println!("BTC: {}", response.text().await?);
//!
//!     // Read-only endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CoinspotClient::with_credentials(creds)?;
//!     let status = auth_client.read_only_status_check().await?;
//!     println!("Status: {}", status.text().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

// Re-export main types
pub use client::CoinspotClient;
pub use config::ClientConfig;
pub use endpoints::{ApiScope, PublicEndpoint, PublicEndpoints, SignedEndpoints};
pub use error::{RestError, RestResult};

// Re-export signing types
pub use coinspot_auth::{AuthError, Credentials, Nonce, Payload, RequestSigner};
