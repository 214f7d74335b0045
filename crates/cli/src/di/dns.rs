use ferrous_doh_application::services::QueryRace;
use ferrous_doh_application::use_cases::LookupUseCase;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::ReqwestRequester;
use std::sync::Arc;
use tracing::debug;

pub struct DohServices {
    pub lookup: Arc<LookupUseCase>,
}

impl DohServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = &config.resolver;

        let requester = ReqwestRequester::from_config(resolver)?;
        let race = Arc::new(QueryRace::new(
            resolver.providers.iter().map(String::as_str),
            Arc::new(requester),
        ));

        debug!(
            providers = ?resolver.providers,
            timeout_ms = resolver.timeout_ms,
            record_type_policy = resolver.record_type_policy.as_str(),
            "DoH services ready"
        );

        let lookup = Arc::new(
            LookupUseCase::new(race).with_record_type_policy(resolver.record_type_policy),
        );

        Ok(Self { lookup })
    }
}
