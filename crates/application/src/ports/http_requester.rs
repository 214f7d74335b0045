use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DohError;
use std::sync::Arc;

/// A single outbound GET, fully described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGet {
    pub url: Arc<str>,

    /// Query parameters appended to `url`, in order.
    pub query: Vec<(&'static str, String)>,

    /// Value of the `Accept` header.
    pub accept: &'static str,
}

/// Port for the HTTPS transport the resolver rides on.
///
/// Implementations own timeouts, TLS and connection pooling. Any failure to
/// obtain a successful response body must be reported as
/// [`DohError::Transport`].
#[async_trait]
pub trait HttpRequester: Send + Sync {
    async fn get(&self, request: &HttpGet) -> Result<Bytes, DohError>;
}
