//! Ferrous DoH Application Layer
//!
//! Racing of DoH providers and the typed record lookups built on top of it.
pub mod ports;
pub mod services;
pub mod use_cases;
