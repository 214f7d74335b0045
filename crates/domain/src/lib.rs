//! Ferrous DoH Domain Layer
pub mod config;
pub mod dns_record;
pub mod doh_response;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, RecordTypePolicy, ResolverConfig};
pub use dns_record::{MxRecord, NsRecord, RecordType, SrvRecord};
pub use doh_response::{DohQuestion, ProviderResponse, RawAnswer};
pub use errors::{CancelReason, DohError};
