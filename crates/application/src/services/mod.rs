mod lookup_context;
pub mod provider_query;
pub mod query_race;

pub use lookup_context::LookupContext;
pub use provider_query::{query_provider, DNS_JSON_CONTENT_TYPE};
pub use query_race::{strip_quotes, QueryRace};
