mod http_requester;

pub use http_requester::{HttpGet, HttpRequester};
