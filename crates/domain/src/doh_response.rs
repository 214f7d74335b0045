//! JSON answer format shared by the public DoH providers
//! (Google `/resolve`, Cloudflare and Quad9 `application/dns-json`).
//!
//! ```text
//! {
//!   "Status": 0, "TC": false, "RD": true, "RA": true, "AD": false, "CD": false,
//!   "Question": [{ "name": "example.com.", "type": 1 }],
//!   "Answer":   [{ "name": "example.com.", "type": 1, "TTL": 300, "data": "93.184.216.34" }]
//! }
//! ```
//!
//! Only structural parsing happens here. Deciding which answers are usable is
//! the race's job.

use crate::{DohError, RecordType};
use serde::{Deserialize, Deserializer};

/// DNS response code for NOERROR.
pub const STATUS_NOERROR: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DohQuestion {
    /// FQDN, usually with a trailing dot
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAnswer {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Seconds; zero means the record must not be used.
    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

impl RawAnswer {
    /// Answers whose type the decoder did not recognise never match.
    pub fn is_usable_for(&self, record_type: RecordType) -> bool {
        !self.record_type.is_reserved() && self.record_type == record_type && self.ttl != 0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderResponse {
    #[serde(rename = "Status")]
    pub status: u32,

    /// Truncated
    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    /// Every record in the answer was validated with DNSSEC by the provider.
    #[serde(rename = "AD")]
    pub authenticated_data: bool,

    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question")]
    pub question: Vec<DohQuestion>,

    #[serde(rename = "Answer")]
    pub answer: Vec<RawAnswer>,

    #[serde(rename = "Additional")]
    pub additional: Vec<serde_json::Value>,

    pub edns_client_subnet: Option<String>,

    /// Free-form diagnostics. Google sends a string, some resolvers a list.
    #[serde(rename = "Comment", deserialize_with = "comment_text")]
    pub comment: Option<String>,
}

impl ProviderResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DohError> {
        serde_json::from_slice(bytes).map_err(|e| DohError::Decode(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_NOERROR
    }

    /// Answers matching `record_type` with a nonzero TTL, in provider order.
    pub fn usable_answers(&self, record_type: RecordType) -> impl Iterator<Item = &RawAnswer> {
        self.answer
            .iter()
            .filter(move |ans| ans.is_usable_for(record_type))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentField {
    Text(String),
    Lines(Vec<String>),
}

fn comment_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<CommentField>::deserialize(deserializer)?;
    Ok(field.map(|c| match c {
        CommentField::Text(text) => text,
        CommentField::Lines(lines) => lines.join(" "),
    }))
}
