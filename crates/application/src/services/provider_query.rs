//! One DoH JSON query against one provider.
//!
//! ```text
//! GET /dns-query?name=example.com&type=AAAA HTTP/1.1
//! Accept: application/dns-json
//! ```

use crate::ports::{HttpGet, HttpRequester};
use ferrous_doh_domain::{DohError, ProviderResponse, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Media type of the JSON answer format (as opposed to RFC 8484
/// `application/dns-message`).
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

pub fn build_request(provider: &Arc<str>, domain: &str, record_type: RecordType) -> HttpGet {
    HttpGet {
        url: Arc::clone(provider),
        query: vec![
            ("name", domain.to_string()),
            ("type", record_type.to_string()),
        ],
        accept: DNS_JSON_CONTENT_TYPE,
    }
}

/// Single attempt, no retry. Transport failures come back as
/// [`DohError::Transport`], unparseable bodies as [`DohError::Decode`].
pub async fn query_provider(
    requester: &dyn HttpRequester,
    provider: &Arc<str>,
    domain: &str,
    record_type: RecordType,
) -> Result<ProviderResponse, DohError> {
    let request = build_request(provider, domain, record_type);
    let body = requester.get(&request).await?;

    let response = ProviderResponse::from_slice(&body).map_err(|e| match e {
        DohError::Decode(msg) => {
            DohError::Decode(format!("json decode response from {}: {}", provider, msg))
        }
        other => other,
    })?;

    debug!(
        provider = %provider,
        domain = %domain,
        record_type = %record_type,
        status = response.status,
        answers = response.answer.len(),
        "DoH response decoded"
    );

    Ok(response)
}
