use crate::RecordType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDERS: &[&str] = &[
    "https://cloudflare-dns.com/dns-query",
    "https://dns.google/resolve",
    "https://dns.quad9.net:5053/dns-query",
];

/// Which record type the CNAME, NS and MX lookups put on the wire.
///
/// `Compat` asks providers for TXT records and parses the TXT payloads, which
/// matches long-standing provider behaviour. `Strict` asks for the record type the
/// lookup is named after.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordTypePolicy {
    #[default]
    Compat,

    Strict,
}

impl RecordTypePolicy {
    pub fn query_type(&self, semantic: RecordType) -> RecordType {
        match (self, semantic) {
            (RecordTypePolicy::Compat, RecordType::CNAME | RecordType::NS | RecordType::MX) => {
                RecordType::TXT
            }
            _ => semantic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Per-request timeout of the HTTP client, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub record_type_policy: RecordTypePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            record_type_policy: RecordTypePolicy::default(),
        }
    }
}

fn default_providers() -> Vec<String> {
    DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_user_agent() -> String {
    concat!("ferrous-doh/", env!("CARGO_PKG_VERSION")).to_string()
}
