//! Authenticated endpoints
//!
//! Every request is a POST whose JSON body is signed with HMAC-SHA512. The
//! signed body is sent byte-for-byte, so nothing between signing and sending
//! may re-serialize it.

use crate::endpoints::join_url;
use crate::error::RestResult;
use coinspot_auth::{Nonce, Payload, RequestSigner};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Body, Client, Request, Response};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Header carrying the public API key
pub const KEY_HEADER: &str = "key";
/// Header carrying the hex HMAC-SHA512 signature
pub const SIGN_HEADER: &str = "sign";

/// Which authenticated API a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiScope {
    /// Read-only API (`/api/v2/ro`)
    ReadOnly,
    /// Full-access API (`/api/v2`)
    Full,
}

impl fmt::Display for ApiScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly => write!(f, "read-only"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Authenticated endpoints of one scope
pub struct SignedEndpoints<'a> {
    client: &'a Client,
    signer: &'a RequestSigner,
    base_url: &'a str,
    scope: ApiScope,
}

impl<'a> SignedEndpoints<'a> {
    pub fn new(
        client: &'a Client,
        signer: &'a RequestSigner,
        base_url: &'a str,
        scope: ApiScope,
    ) -> Self {
        Self {
            client,
            signer,
            base_url,
            scope,
        }
    }

    /// Scope these endpoints target
    pub fn scope(&self) -> ApiScope {
        self.scope
    }

    /// Sign `payload` and build the POST for `path` without sending it
    ///
    /// # Arguments
    /// * `path` - Endpoint path below the scope's base (e.g., "/status")
    /// * `payload` - JSON object containing a fresh `nonce`
    ///
    /// # Errors
    /// Signing preconditions (`RestError::Auth`) are checked here, before any
    /// network I/O. The nonce is only reserved once the rest of the request
    /// has been built, so a request that fails to build can be retried with
    /// the same nonce.
    pub fn request<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> RestResult<Request> {
        let url = join_url(self.base_url, &[path.trim_start_matches('/')]);

        // Build everything that can fail before signing reserves the nonce
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/plain")
            .header(KEY_HEADER, self.signer.api_key())
            .build()?;

        let signed = self.signer.sign(payload)?;
        request
            .headers_mut()
            .insert(SIGN_HEADER, HeaderValue::from_str(signed.sign())?);
        *request.body_mut() = Some(Body::from(signed.into_body()));

        Ok(request)
    }

    /// Send a signed POST and return the response as received
    #[instrument(skip(self, payload), fields(scope = %self.scope))]
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> RestResult<Response> {
        let request = self.request(path, payload)?;
        debug!("POST {}", request.url());

        let response = self.client.execute(request).await?;
        debug!(status = %response.status(), "Signed request completed");

        Ok(response)
    }

    /// Check the API key works, using a fresh nonce
    #[instrument(skip(self), fields(scope = %self.scope))]
    pub async fn status(&self) -> RestResult<Response> {
        self.status_with_nonce(Nonce::now()).await
    }

    /// Check the API key works, using a caller-chosen nonce
    #[instrument(skip(self), fields(scope = %self.scope))]
    pub async fn status_with_nonce(&self, nonce: Nonce) -> RestResult<Response> {
        self.post("/status", &Payload::new(nonce)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestError;
    use coinspot_auth::{AuthError, Credentials};

    const RO_BASE: &str = "https://www.coinspot.com.au/api/v2/ro";

    fn signer() -> RequestSigner {
        RequestSigner::new(Credentials::new("K", "P").unwrap())
    }

    fn header<'r>(request: &'r Request, name: &str) -> &'r str {
        request.headers().get(name).unwrap().to_str().unwrap()
    }

    #[test]
    fn test_status_request_shape() {
        let client = Client::new();
        let signer = signer();
        let endpoints = SignedEndpoints::new(&client, &signer, RO_BASE, ApiScope::ReadOnly);

        let request = endpoints.request("/status", &Payload::new(Nonce::new(1))).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://www.coinspot.com.au/api/v2/ro/status");
        assert_eq!(header(&request, "content-type"), "application/json");
        assert_eq!(header(&request, "accept"), "text/plain");
        assert_eq!(header(&request, "key"), "K");
        assert_eq!(
            header(&request, "sign"),
            "16b6ed8a8982c3a0ea7561a268beded8e18da62b6f8a81857437c79b59080aa4f2ce2aa94bb613c30dee566dbcacfca2ba653cce0726811bb8592014d96e23d0"
        );

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"nonce":1}"#);
    }

    #[test]
    fn test_path_without_leading_slash() {
        let client = Client::new();
        let signer = signer();
        let endpoints = SignedEndpoints::new(&client, &signer, RO_BASE, ApiScope::ReadOnly);

        let request = endpoints.request("status", &Payload::new(Nonce::new(1))).unwrap();
        assert_eq!(request.url().path(), "/api/v2/ro/status");
    }

    #[test]
    fn test_full_scope_uses_its_base() {
        let client = Client::new();
        let signer = signer();
        let endpoints = SignedEndpoints::new(
            &client,
            &signer,
            "https://www.coinspot.com.au/api/v2",
            ApiScope::Full,
        );

        let request = endpoints.request("/status", &Payload::new(Nonce::new(1))).unwrap();
        assert_eq!(request.url().path(), "/api/v2/status");
        assert_eq!(endpoints.scope(), ApiScope::Full);
    }

    #[test]
    fn test_precondition_failures_before_send() {
        let client = Client::new();
        let signer = signer();
        let endpoints = SignedEndpoints::new(&client, &signer, RO_BASE, ApiScope::ReadOnly);

        endpoints.request("/status", &Payload::new(Nonce::new(10))).unwrap();

        let stale = endpoints.request("/status", &Payload::new(Nonce::new(10)));
        assert!(matches!(
            stale,
            Err(RestError::Auth(AuthError::StaleNonce { nonce: 10, last: 10 }))
        ));

        let missing = endpoints.request("/status", &serde_json::json!({ "cointype": "BTC" }));
        assert!(matches!(missing, Err(RestError::Auth(AuthError::MissingNonce))));
    }

    #[test]
    fn test_unbuildable_request_keeps_nonce() {
        let client = Client::new();
        let signer = signer();
        let endpoints = SignedEndpoints::new(&client, &signer, "not a url", ApiScope::ReadOnly);

        let result = endpoints.request("/status", &Payload::new(Nonce::new(1)));
        assert!(matches!(result, Err(RestError::Http(_))));
        assert_eq!(signer.last_nonce(), 0);

        // The same nonce is still usable once the request can be built
        let endpoints = SignedEndpoints::new(&client, &signer, RO_BASE, ApiScope::ReadOnly);
        assert!(endpoints.request("/status", &Payload::new(Nonce::new(1))).is_ok());
        assert_eq!(signer.last_nonce(), 1);
    }
}
