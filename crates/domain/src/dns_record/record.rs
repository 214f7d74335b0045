use serde::Serialize;

/// A single SRV target, as carried in the `"priority weight port target"`
/// answer string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SrvRecord {
    pub target: String,

    pub port: u16,

    pub priority: u16,

    pub weight: u16,
}

impl SrvRecord {
    pub fn new(target: impl Into<String>, port: u16, priority: u16, weight: u16) -> Self {
        Self {
            target: target.into(),
            port,
            priority,
            weight,
        }
    }
}

/// A mail exchanger, as carried in the `"preference host"` answer string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    pub host: String,

    pub pref: u16,
}

impl MxRecord {
    pub fn new(host: impl Into<String>, pref: u16) -> Self {
        Self {
            host: host.into(),
            pref,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NsRecord {
    pub host: String,
}

impl NsRecord {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}
