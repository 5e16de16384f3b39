//! The network boundary.
//!
//! Everything above this module works with [`GatewayRequest`] and
//! [`RawResponse`] values; only a [`Transport`] touches the wire. Tests
//! implement the trait directly to script exchanges without a server.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{IntouchPayError, IntouchPayResult};
use crate::request::GatewayRequest;

/// One exchange's result before any decoding. Non-2xx statuses land here
/// too; classifying them is the decoder's job, not the transport's.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase, where the status line had one.
    pub reason: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries a built request to the gateway and returns whatever came back.
///
/// Implementations must not interpret the response; an `Err` means the
/// exchange itself failed (connect, timeout, interrupted read).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, request: &GatewayRequest) -> IntouchPayResult<RawResponse>;
}

/// Production transport over a shared reqwest client.
///
/// The client enforces the configured timeout across connect and read, so
/// one stuck exchange cannot hold a caller past the bound.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> IntouchPayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IntouchPayError::Transport(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn exchange(&self, request: &GatewayRequest) -> IntouchPayResult<RawResponse> {
        let url = format!("{}{}", self.base_url, request.endpoint.path());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(request.content_type()));

        debug!(%url, endpoint = ?request.endpoint, "dispatching gateway request");
        let response = self
            .client
            .request(request.method.clone(), url)
            .headers(headers)
            .body(request.body()?)
            .send()
            .await
            .map_err(|e| {
                warn!("gateway exchange failed: {e}");
                IntouchPayError::from(e)
            })?;

        let status = response.status();
        let reason = status.canonical_reason().map(str::to_owned);
        let body = response.bytes().await.map_err(IntouchPayError::from)?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "gateway answered");

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
