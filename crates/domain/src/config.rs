mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{RecordTypePolicy, ResolverConfig, DEFAULT_PROVIDERS};
pub use root::{CliOverrides, Config};
