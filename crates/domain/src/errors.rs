use crate::RecordType;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why a race stopped before any provider produced a usable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Cancelled => write!(f, "query cancelled"),
            CancelReason::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum DohError {
    #[error("No DoH provider configured")]
    NoProviders,

    #[error("DoH request to {provider} failed: {message}")]
    Transport { provider: Arc<str>, message: String },

    #[error("Failed to decode DoH response: {0}")]
    Decode(String),

    #[error("DoH: query domain {domain} on type {record_type}: no answer")]
    NoAnswer {
        domain: Arc<str>,
        record_type: RecordType,
    },

    #[error(
        "DoH: query domain {domain} on type {record_type}: {}",
        .messages.join(", ")
    )]
    Exhausted {
        domain: Arc<str>,
        record_type: RecordType,
        messages: Vec<String>,
    },

    #[error("DoH: query domain {domain} on type {record_type}: {reason}")]
    Cancelled {
        domain: Arc<str>,
        record_type: RecordType,
        reason: CancelReason,
    },
}

impl DohError {
    /// True for every query-level failure: the caller got no answer for the
    /// (domain, type) pair. Per-provider and configuration errors are not
    /// query outcomes and return false.
    pub fn is_no_answer(&self) -> bool {
        matches!(
            self,
            DohError::NoAnswer { .. } | DohError::Exhausted { .. } | DohError::Cancelled { .. }
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DohError::Cancelled { .. })
    }

    /// The (domain, type) pair a query-level error refers to.
    pub fn query(&self) -> Option<(&str, RecordType)> {
        match self {
            DohError::NoAnswer {
                domain,
                record_type,
            }
            | DohError::Exhausted {
                domain,
                record_type,
                ..
            }
            | DohError::Cancelled {
                domain,
                record_type,
                ..
            } => Some((domain, *record_type)),
            _ => None,
        }
    }
}
