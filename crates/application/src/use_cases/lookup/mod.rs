mod address;
mod mail;
mod service;

use crate::services::{LookupContext, QueryRace};
use ferrous_doh_domain::{
    DohError, MxRecord, NsRecord, RecordType, RecordTypePolicy, SrvRecord,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Typed lookups on top of a [`QueryRace`].
///
/// Each lookup races its record type across the providers and parses the
/// winning payloads. Malformed SRV/MX payloads are dropped one by one; a
/// lookup whose every payload was dropped fails with
/// [`DohError::NoAnswer`].
pub struct LookupUseCase {
    race: Arc<QueryRace>,
    policy: RecordTypePolicy,
}

impl LookupUseCase {
    pub fn new(race: Arc<QueryRace>) -> Self {
        Self {
            race,
            policy: RecordTypePolicy::default(),
        }
    }

    pub fn with_record_type_policy(mut self, policy: RecordTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn race(&self) -> &QueryRace {
        &self.race
    }

    pub fn record_type_policy(&self) -> RecordTypePolicy {
        self.policy
    }

    pub async fn lookup_a(&self, ctx: &LookupContext, name: &str) -> Result<Vec<IpAddr>, DohError> {
        let datas = self.race.race(ctx, name, RecordType::A).await?;
        Ok(address::parse_ips(datas, RecordType::A))
    }

    pub async fn lookup_aaaa(
        &self,
        ctx: &LookupContext,
        name: &str,
    ) -> Result<Vec<IpAddr>, DohError> {
        let datas = self.race.race(ctx, name, RecordType::AAAA).await?;
        Ok(address::parse_ips(datas, RecordType::AAAA))
    }

    /// IPv4 then IPv6 addresses of `name`.
    ///
    /// Both families are raced concurrently. Succeeds when either family has
    /// addresses; the A error is reported only when both fail.
    pub async fn lookup_ip(&self, ctx: &LookupContext, name: &str) -> Result<Vec<IpAddr>, DohError> {
        let (v4, v6) = tokio::join!(self.lookup_a(ctx, name), self.lookup_aaaa(ctx, name));

        let mut addrs = Vec::new();
        let mut first_err = None;
        for half in [v4, v6] {
            match half {
                Ok(ips) => addrs.extend(ips),
                Err(e) => {
                    debug!(domain = %name, error = %e, "Address family lookup failed");
                    first_err.get_or_insert(e);
                }
            }
        }

        if !addrs.is_empty() {
            return Ok(addrs);
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(addrs),
        }
    }

    pub async fn lookup_cname(&self, ctx: &LookupContext, name: &str) -> Result<String, DohError> {
        let record_type = self.policy.query_type(RecordType::CNAME);
        let datas = self.race.race(ctx, name, record_type).await?;
        datas
            .into_iter()
            .next()
            .ok_or_else(|| no_answer(name, record_type))
    }

    pub async fn lookup_ns(
        &self,
        ctx: &LookupContext,
        name: &str,
    ) -> Result<Vec<NsRecord>, DohError> {
        let record_type = self.policy.query_type(RecordType::NS);
        let datas = self.race.race(ctx, name, record_type).await?;
        Ok(datas.into_iter().map(NsRecord::new).collect())
    }

    pub async fn lookup_txt(&self, ctx: &LookupContext, name: &str) -> Result<Vec<String>, DohError> {
        self.race.race(ctx, name, RecordType::TXT).await
    }

    /// Reverse lookup. Accepts an IP literal or an already-built
    /// `in-addr.arpa`/`ip6.arpa` name.
    pub async fn lookup_addr(&self, ctx: &LookupContext, addr: &str) -> Result<Vec<String>, DohError> {
        let name = address::reverse_name(addr);
        self.race.race(ctx, &name, RecordType::PTR).await
    }

    /// Returns the queried owner name (with a trailing dot) and its targets
    /// ordered by priority, then weight.
    pub async fn lookup_srv(
        &self,
        ctx: &LookupContext,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<(String, Vec<SrvRecord>), DohError> {
        let target = service::srv_target_name(service, proto, name);
        let datas = self.race.race(ctx, &target, RecordType::SRV).await?;

        let records = service::parse_srv(&datas);
        if records.is_empty() {
            return Err(no_answer(&target, RecordType::SRV));
        }
        Ok((format!("{}.", target), records))
    }

    pub async fn lookup_mx(
        &self,
        ctx: &LookupContext,
        name: &str,
    ) -> Result<Vec<MxRecord>, DohError> {
        let record_type = self.policy.query_type(RecordType::MX);
        let datas = self.race.race(ctx, name, record_type).await?;

        let records = mail::parse_mx(&datas);
        if records.is_empty() {
            return Err(no_answer(name, record_type));
        }
        Ok(records)
    }
}

fn no_answer(domain: &str, record_type: RecordType) -> DohError {
    DohError::NoAnswer {
        domain: Arc::from(domain),
        record_type,
    }
}
