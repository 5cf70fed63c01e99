//! Demo 2: Read-only API Status Check
//!
//! Showcases: credentials from the environment, HMAC-SHA512 request signing
//!
//! Run: COINSPOT_API_KEY=... COINSPOT_API_SECRET=... cargo run --bin status_check

use coinspot_rest::{CoinspotClient, Credentials, RestError};
use colored::*;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinspot_rest=debug".into()),
        )
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINSPOT READ-ONLY STATUS CHECK".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set COINSPOT_API_KEY and COINSPOT_API_SECRET to run this demo.");
            return Ok(());
        }
    };
    println!("{} Loaded {:?}", "✓".green(), creds);

    let client = CoinspotClient::with_credentials(creds)?;

    match client.read_only_status_check().await {
        Ok(response) => {
            let http_status = response.status();
            let text = response.text().await?;
            let Ok(body) = serde_json::from_str::<Value>(&text) else {
                println!("{} HTTP {} with a non-JSON body", "✗".red(), http_status);
                return Ok(());
            };
            let ok = http_status.is_success() && body["status"] == "ok";

            println!(
                "{} HTTP {} status={} message={}",
                if ok { "✓".green() } else { "✗".red() },
                http_status,
                body["status"],
                body["message"]
            );
        }
        Err(RestError::Http(e)) => println!("{} Transport error: {}", "✗".red(), e),
        Err(e) => println!("{} Request not sent: {}", "✗".red(), e),
    }

    Ok(())
}
