//! Common test utilities for integration tests
//!
//! A one-shot HTTP/1.1 server on localhost that records the first request it
//! receives and answers with a canned response.

#![allow(dead_code)]

use coinspot_rest::{ClientConfig, CoinspotClient, Credentials};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Sample public price response from CoinSpot
pub const LATEST_BTC_USDT: &str =
    r#"{"status":"ok","message":"ok","prices":{"bid":"98000.00","ask":"98100.00","last":"98050.00"}}"#;

/// Sample successful status response
pub const STATUS_OK: &str = r#"{"status":"ok","message":"ok"}"#;

/// Sample application error (still HTTP 200 upstream)
pub const STATUS_INVALID_NONCE: &str = r#"{"status":"error","message":"Invalid nonce"}"#;

/// Request as seen on the wire
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    /// Header value, name compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Local server answering a single request
pub struct OneShotServer {
    pub base: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    /// Start a server replying `status` (e.g. "200 OK") with a JSON `body`
    pub async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let captured = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();

            captured
        });

        Self { base, handle }
    }

    /// Wait for the captured request
    pub async fn captured(self) -> CapturedRequest {
        self.handle.await.unwrap()
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8(buf[..header_end].to_vec()).unwrap();
    let mut lines = head.split("\r\n").filter(|l| !l.is_empty());

    let request_line = lines.next().unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap().to_string();
    let path = parts.next().unwrap().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map(|(_, v)| v.parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8(buf[header_end..header_end + content_length].to_vec()).unwrap();

    CapturedRequest {
        method,
        path,
        headers,
        body,
    }
}

/// Client whose three base URLs all point at `base`, laid out like CoinSpot's
pub fn client_for(base: &str, credentials: Option<Credentials>) -> CoinspotClient {
    let mut config = ClientConfig::new()
        .with_timeout(5)
        .with_public_base_url(format!("{}/pubapi/v2", base))
        .with_read_only_base_url(format!("{}/api/v2/ro", base))
        .with_private_base_url(format!("{}/api/v2", base));

    if let Some(credentials) = credentials {
        config = config.with_credentials(credentials);
    }

    CoinspotClient::with_config(config).unwrap()
}
