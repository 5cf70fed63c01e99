//! Public market data endpoints
//!
//! These endpoints don't require authentication. Coin and market tickers are
//! passed through verbatim; an unknown ticker is reported by the server, not
//! rejected here.

use crate::endpoints::join_url;
use crate::error::RestResult;
use reqwest::{Client, Request, Response};
use tracing::{debug, instrument};

/// Path templates of the public API
///
/// Coin-only and coin/market variants are distinct endpoints upstream
/// (`/op/{coin}` vs `/op/{coin}/{market}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicEndpoint<'a> {
    /// `/latest`
    LatestPrices,
    /// `/latest/{coin}`
    LatestCoinPrice { coin: &'a str },
    /// `/latest/{coin}/{market}`
    LatestCoinMarketPrice { coin: &'a str, market: &'a str },
    /// `/buyprice/{coin}`
    BuyPrice { coin: &'a str },
    /// `/buyprice/{coin}/{market}`
    BuyMarketPrice { coin: &'a str, market: &'a str },
    /// `/sellprice/{coin}`
    SellPrice { coin: &'a str },
    /// `/sellprice/{coin}/{market}`
    SellMarketPrice { coin: &'a str, market: &'a str },
    /// `/orders/open/{coin}`
    OpenOrders { coin: &'a str },
    /// `/orders/open/{coin}/{market}`
    OpenOrdersMarket { coin: &'a str, market: &'a str },
    /// `/orders/completed/{coin}`
    CompletedOrders { coin: &'a str },
    /// `/orders/completed/{coin}/{market}`
    CompletedOrdersMarket { coin: &'a str, market: &'a str },
}

impl<'a> PublicEndpoint<'a> {
    /// Path segments, identifiers included
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Self::LatestPrices => vec!["latest"],
            Self::LatestCoinPrice { coin } => vec!["latest", coin],
            Self::LatestCoinMarketPrice { coin, market } => vec!["latest", coin, market],
            Self::BuyPrice { coin } => vec!["buyprice", coin],
            Self::BuyMarketPrice { coin, market } => vec!["buyprice", coin, market],
            Self::SellPrice { coin } => vec!["sellprice", coin],
            Self::SellMarketPrice { coin, market } => vec!["sellprice", coin, market],
            Self::OpenOrders { coin } => vec!["orders", "open", coin],
            Self::OpenOrdersMarket { coin, market } => vec!["orders", "open", coin, market],
            Self::CompletedOrders { coin } => vec!["orders", "completed", coin],
            Self::CompletedOrdersMarket { coin, market } => {
                vec!["orders", "completed", coin, market]
            }
        }
    }

    /// Path relative to the public base, with a leading `/`
    pub fn path(&self) -> String {
        join_url("", &self.segments())
    }
}

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> PublicEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Full URL for an endpoint
    pub fn url(&self, endpoint: PublicEndpoint<'_>) -> String {
        join_url(self.base_url, &endpoint.segments())
    }

    /// Build the GET request for an endpoint without sending it
    pub fn request(&self, endpoint: PublicEndpoint<'_>) -> RestResult<Request> {
        Ok(self.client.get(self.url(endpoint)).build()?)
    }

    /// Send an unauthenticated GET and return the response as received
    async fn get(&self, endpoint: PublicEndpoint<'_>) -> RestResult<Response> {
        let request = self.request(endpoint)?;
        debug!("GET {}", request.url());

        let response = self.client.execute(request).await?;
        debug!(status = %response.status(), "Public request completed");

        Ok(response)
    }

    /// Latest prices for all coins
    #[instrument(skip(self))]
    pub async fn latest_prices(&self) -> RestResult<Response> {
        self.get(PublicEndpoint::LatestPrices).await
    }

    /// Latest prices for one coin
    ///
    /// # Arguments
    /// * `coin` - Coin ticker (e.g., "BTC", "LTC", "DOGE")
    #[instrument(skip(self))]
    pub async fn latest_coin_price(&self, coin: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::LatestCoinPrice { coin }).await
    }

    /// Latest prices for a coin in a non-AUD market
    ///
    /// # Arguments
    /// * `coin` - Coin ticker (e.g., "BTC")
    /// * `market` - Market ticker (e.g., "USDT")
    #[instrument(skip(self))]
    pub async fn latest_coin_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::LatestCoinMarketPrice { coin, market })
            .await
    }

    /// Latest buy price for a coin
    #[instrument(skip(self))]
    pub async fn latest_buy_price(&self, coin: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::BuyPrice { coin }).await
    }

    /// Latest buy price for a coin, paid in `market`
    #[instrument(skip(self))]
    pub async fn latest_buy_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::BuyMarketPrice { coin, market }).await
    }

    /// Latest sell price for a coin
    #[instrument(skip(self))]
    pub async fn latest_sell_price(&self, coin: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::SellPrice { coin }).await
    }

    /// Latest sell price for a coin, received in `market`
    #[instrument(skip(self))]
    pub async fn latest_sell_market_price(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::SellMarketPrice { coin, market }).await
    }

    /// Open orders for a coin
    #[instrument(skip(self))]
    pub async fn open_orders_coin(&self, coin: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::OpenOrders { coin }).await
    }

    /// Open orders for a coin in a market
    #[instrument(skip(self))]
    pub async fn open_orders_coin_market(&self, coin: &str, market: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::OpenOrdersMarket { coin, market }).await
    }

    /// Completed orders for a coin
    #[instrument(skip(self))]
    pub async fn completed_orders_coin(&self, coin: &str) -> RestResult<Response> {
        self.get(PublicEndpoint::CompletedOrders { coin }).await
    }

    /// Completed orders for a coin in a market
    #[instrument(skip(self))]
    pub async fn completed_orders_coin_market(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<Response> {
        self.get(PublicEndpoint::CompletedOrdersMarket { coin, market })
            .await
    }
}
