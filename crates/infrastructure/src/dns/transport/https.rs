//! HTTPS transport for DoH JSON queries.
//!
//! Sends the query as an HTTP GET with the question in the URL and reads
//! the JSON body back:
//! ```text
//! GET /resolve?name=example.com&type=A HTTP/2
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{HttpGet, HttpRequester};
use ferrous_doh_domain::{DohError, ResolverConfig};
use reqwest::header::ACCEPT;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// [`HttpRequester`] backed by a pooled `reqwest` client.
///
/// One instance is shared by every provider task of every race.
#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    client: reqwest::Client,
}

impl ReqwestRequester {
    pub fn new(timeout: Duration, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ResolverConfig) -> reqwest::Result<Self> {
        Self::new(Duration::from_millis(config.timeout_ms), &config.user_agent)
    }

    /// Wraps a preconfigured client (proxies, custom roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn transport_error(url: &Arc<str>, message: String) -> DohError {
    DohError::Transport {
        provider: Arc::clone(url),
        message,
    }
}

#[async_trait]
impl HttpRequester for ReqwestRequester {
    async fn get(&self, request: &HttpGet) -> Result<Bytes, DohError> {
        debug!(url = %request.url, params = ?request.query, "Sending DoH query");

        let response = self
            .client
            .get(&*request.url)
            .query(&request.query)
            .header(ACCEPT, request.accept)
            .send()
            .await
            .map_err(|e| transport_error(&request.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(
                &request.url,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&request.url, format!("failed to read body: {}", e)))?;

        debug!(url = %request.url, response_len = body.len(), "DoH response received");

        Ok(body)
    }
}
