use super::provider_query::query_provider;
use super::LookupContext;
use crate::ports::HttpRequester;
use ferrous_doh_domain::{DohError, ProviderResponse, RecordType};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Races one logical query across every configured provider.
///
/// The first provider to answer with at least one usable record wins. A
/// provider that fails is recorded; one that answers with a non-zero status
/// or without usable records abstains silently.
pub struct QueryRace {
    providers: Arc<[Arc<str>]>,
    requester: Arc<dyn HttpRequester>,
}

impl QueryRace {
    pub fn new<I, S>(providers: I, requester: Arc<dyn HttpRequester>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            providers: providers.into_iter().map(Into::into).collect(),
            requester,
        }
    }

    pub fn providers(&self) -> &[Arc<str>] {
        &self.providers
    }

    pub async fn race(
        &self,
        ctx: &LookupContext,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DohError> {
        if self.providers.is_empty() {
            return Err(DohError::NoProviders);
        }

        let domain: Arc<str> = Arc::from(domain);
        let record_type = record_type.canonical();

        if let Some(reason) = ctx.check() {
            return Err(DohError::Cancelled {
                domain,
                record_type,
                reason,
            });
        }

        debug!(
            providers = self.providers.len(),
            domain = %domain,
            record_type = %record_type,
            "Racing DoH providers"
        );

        let mut futs = FuturesUnordered::new();
        let mut losers = AbortOnDrop(Vec::with_capacity(self.providers.len()));

        for provider in self.providers.iter() {
            let provider = Arc::clone(provider);
            let requester = Arc::clone(&self.requester);
            let domain = Arc::clone(&domain);
            let handle = tokio::spawn(async move {
                let result =
                    query_provider(requester.as_ref(), &provider, &domain, record_type).await;
                (provider, result)
            });
            losers.0.push(handle.abort_handle());
            futs.push(handle);
        }

        let done = ctx.done();
        tokio::pin!(done);

        let mut messages = Vec::new();

        loop {
            tokio::select! {
                biased;

                reason = &mut done => {
                    debug!(domain = %domain, record_type = %record_type, %reason, "Race stopped before a winner");
                    return Err(DohError::Cancelled {
                        domain,
                        record_type,
                        reason,
                    });
                }

                next = futs.next() => match next {
                    Some(Ok((provider, Ok(response)))) => {
                        let datas = usable_data(&response, record_type);
                        if datas.is_empty() {
                            debug!(provider = %provider, status = response.status, "Provider abstained");
                            continue;
                        }
                        debug!(provider = %provider, records = datas.len(), "Fastest usable answer");
                        return Ok(datas);
                    }
                    Some(Ok((provider, Err(e)))) => {
                        debug!(provider = %provider, error = %e, "Provider failed");
                        messages.push(e.to_string());
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Provider task panicked");
                        messages.push(format!("provider task failed: {}", e));
                    }
                    None => break,
                },
            }
        }

        Err(DohError::Exhausted {
            domain,
            record_type,
            messages,
        })
    }
}

/// Cleaned data strings of the answers usable for `record_type`. Empty when
/// the provider reported a non-zero status.
fn usable_data(response: &ProviderResponse, record_type: RecordType) -> Vec<String> {
    if !response.is_success() {
        return Vec::new();
    }
    response
        .usable_answers(record_type)
        .map(|ans| strip_quotes(&ans.data).to_string())
        .collect()
}

/// Removes exactly one surrounding pair of double quotes, as Google and
/// Quad9 add around TXT payloads.
pub fn strip_quotes(data: &str) -> &str {
    if data.len() >= 2 && data.starts_with('"') && data.ends_with('"') {
        &data[1..data.len() - 1]
    } else {
        data
    }
}

/// Aborts every provider task still running when the race returns, whether
/// it won, lost, was cancelled, or its future was dropped by the caller.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}
