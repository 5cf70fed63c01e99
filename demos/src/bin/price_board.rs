//! Demo 1: Price Board
//!
//! Showcases: public market data endpoints, raw response handling
//!
//! Run: cargo run --bin price_board -- BTC ETH DOGE

use coinspot_rest::CoinspotClient;
use colored::*;
use serde_json::Value;

const MARKET: &str = "USDT";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut coins: Vec<String> = std::env::args().skip(1).collect();
    if coins.is_empty() {
        coins = vec!["BTC".into(), "ETH".into(), "DOGE".into()];
    }

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINSPOT PRICE BOARD".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = CoinspotClient::new()?;

    for coin in &coins {
        let aud = client.latest_coin_price(coin).await?;
        let aud_ok = aud.status().is_success();
        let aud = match decode_prices(aud_ok, &aud.text().await?) {
            Ok(body) => body,
            Err(reason) => {
                println!("  {} {}: {}", "✗".red(), coin.bold(), reason);
                continue;
            }
        };

        println!(
            "  {} {:<6} {} {}  {} {}  {} {}",
            "✓".green(),
            coin.bold(),
            "BID:".yellow(),
            aud["prices"]["bid"].as_str().unwrap_or("-"),
            "ASK:".yellow(),
            aud["prices"]["ask"].as_str().unwrap_or("-"),
            "LAST:".yellow(),
            aud["prices"]["last"].as_str().unwrap_or("-"),
        );

        let market = client.latest_coin_market_price(coin, MARKET).await?;
        let market_ok = market.status().is_success();
        if let Ok(market) = decode_prices(market_ok, &market.text().await?) {
            println!(
                "           {} {}",
                format!("{}/{}:", coin, MARKET).dimmed(),
                market["prices"]["last"].as_str().unwrap_or("-")
            );
        }
    }

    println!();
    Ok(())
}

/// Decode a price response, or say why it is unusable
///
/// The HTTP status is checked first so an HTML error page never reaches the
/// JSON decoder.
fn decode_prices(http_ok: bool, body: &str) -> Result<Value, String> {
    if !http_ok {
        return Err("request failed".to_string());
    }

    let body: Value = serde_json::from_str(body).map_err(|e| format!("unreadable body: {}", e))?;
    if body["status"] != "ok" {
        return Err(body["message"].as_str().unwrap_or("request failed").to_string());
    }

    Ok(body)
}
