//! Main REST client implementation

use crate::config::ClientConfig;
use crate::endpoints::{ApiScope, PublicEndpoints, SignedEndpoints};
use crate::error::{RestError, RestResult};
use coinspot_auth::{Credentials, RequestSigner};
use reqwest::{Client, Response};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const DEFAULT_USER_AGENT: &str = concat!("coinspot-rest/", env!("CARGO_PKG_VERSION"));

/// CoinSpot REST API client
///
/// Provides access to both public and authenticated endpoints. Every call
/// issues exactly one HTTP request and hands back the raw response.
///
/// # Example
///
/// ```no_run
/// use coinspot_rest::{CoinspotClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CoinspotClient::new()?;
///     let prices = client.latest_coin_market_price("BTC", "USDT").await?;
///     println!("{}", prices.text().await?);
///
///     // With authentication for read-only endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CoinspotClient::with_credentials(creds)?;
///     let status = auth_client.read_only_status_check().await?;
///     println!("{}", status.status());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinspotClient {
    http_client: Client,
    signer: Option<Arc<RequestSigner>>,
    public_base_url: String,
    read_only_base_url: String,
    private_base_url: String,
}

impl CoinspotClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and authenticated) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        info!(
            authenticated = config.credentials.is_some(),
            "Created CoinSpot REST client"
        );

        Ok(Self {
            http_client,
            signer: config.credentials.map(|c| Arc::new(RequestSigner::new(c))),
            public_base_url: config.public_base_url,
            read_only_base_url: config.read_only_base_url,
            private_base_url: config.private_base_url,
        })
    }

    /// Check if the client has credentials for authenticated endpoints
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get public endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(&self.http_client, &self.public_base_url)
    }

    /// Latest prices for all coins
    pub async fn latest_prices(&self) -> RestResult<Response> {
        self.public().latest_prices().await
    }

    /// Latest prices for one coin
    pub async fn latest_coin_price(&self, coin: &str) -> RestResult<Response> {
        self.public().latest_coin_price(coin).await
    }

    /// Latest prices for a coin in a market (e.g., "BTC", "USDT")
    pub async fn latest_coin_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.public().latest_coin_market_price(coin, market).await
    }

    /// Latest buy price for a coin
    pub async fn latest_buy_price(&self, coin: &str) -> RestResult<Response> {
        self.public().latest_buy_price(coin).await
    }

    /// Latest buy price for a coin in a market
    pub async fn latest_buy_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.public().latest_buy_market_price(coin, market).await
    }

    /// Latest sell price for a coin
    pub async fn latest_sell_price(&self, coin: &str) -> RestResult<Response> {
        self.public().latest_sell_price(coin).await
    }

    /// Latest sell price for a coin in a market
    pub async fn latest_sell_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.public().latest_sell_market_price(coin, market).await
    }

    /// Open orders for a coin
    pub async fn open_orders_coin(&self, coin: &str) -> RestResult<Response> {
        self.public().open_orders_coin(coin).await
    }

    /// Open orders for a coin in a market
    pub async fn open_orders_coin_market(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.public().open_orders_coin_market(coin, market).await
    }

    /// Completed orders for a coin
    pub async fn completed_orders_coin(&self, coin: &str) -> RestResult<Response> {
        self.public().completed_orders_coin(coin).await
    }

    /// Completed orders for a coin in a market
    pub async fn completed_orders_coin_market(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<Response> {
        self.public().completed_orders_coin_market(coin, market).await
    }

    // ========================================================================
    // Authenticated Endpoints
    // ========================================================================

    fn signed(&self, scope: ApiScope) -> RestResult<SignedEndpoints<'_>> {
        let signer = self.signer.as_deref().ok_or(RestError::AuthRequired)?;
        let base_url = match scope {
            ApiScope::ReadOnly => &self.read_only_base_url,
            ApiScope::Full => &self.private_base_url,
        };
        Ok(SignedEndpoints::new(&self.http_client, signer, base_url, scope))
    }

    /// Get read-only endpoints (requires credentials)
    pub fn read_only(&self) -> RestResult<SignedEndpoints<'_>> {
        self.signed(ApiScope::ReadOnly)
    }

    /// Get full-access endpoints (requires credentials)
    pub fn private(&self) -> RestResult<SignedEndpoints<'_>> {
        self.signed(ApiScope::Full)
    }

    /// Check the read-only API key works
    pub async fn read_only_status_check(&self) -> RestResult<Response> {
        self.read_only()?.status().await
    }
}

impl std::fmt::Debug for CoinspotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinspotClient")
            .field("has_credentials", &self.has_credentials())
            .field("public_base_url", &self.public_base_url)
            .field("read_only_base_url", &self.read_only_base_url)
            .field("private_base_url", &self.private_base_url)
            .finish()
    }
}
