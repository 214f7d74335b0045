use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{HttpGet, HttpRequester};
use ferrous_doh_domain::DohError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    /// Body returned after `delay`.
    Body { body: String, delay: Duration },
    /// Transport failure after `delay`.
    Fail { message: String, delay: Duration },
    Panic,
}

impl MockReply {
    pub fn json(body: impl Into<String>) -> Self {
        Self::Body {
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed_json(body: impl Into<String>, delay: Duration) -> Self {
        Self::Body {
            body: body.into(),
            delay,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed_fail(message: impl Into<String>, delay: Duration) -> Self {
        Self::Fail {
            message: message.into(),
            delay,
        }
    }
}

/// Builds a NOERROR body whose answers all carry `record_type` and TTL 300.
pub fn answer_json(record_type: &str, datas: &[&str]) -> String {
    let answers: Vec<String> = datas
        .iter()
        .map(|d| {
            format!(
                r#"{{"name":"example.com.","type":"{}","TTL":300,"data":{}}}"#,
                record_type,
                serde_json_string(d)
            )
        })
        .collect();
    format!(r#"{{"Status":0,"Answer":[{}]}}"#, answers.join(","))
}

fn serde_json_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Scripted [`HttpRequester`]: replies are looked up by `(url, type)` first,
/// then by `url` alone.
#[derive(Clone, Default)]
pub struct MockHttpRequester {
    routes: Arc<Mutex<HashMap<(String, Option<String>), MockReply>>>,
    requests: Arc<Mutex<Vec<HttpGet>>>,
    completed: Arc<AtomicUsize>,
}

impl MockHttpRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: &str, reply: MockReply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((url.to_string(), None), reply);
        self
    }

    pub fn route_type(self, url: &str, record_type: &str, reply: MockReply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((url.to_string(), Some(record_type.to_string())), reply);
        self
    }

    pub fn requests(&self) -> Vec<HttpGet> {
        self.requests.lock().unwrap().clone()
    }

    /// Names queried, in the order the requests were issued.
    pub fn queried(&self) -> Vec<(String, String)> {
        self.requests()
            .iter()
            .map(|r| (param(r, "name"), param(r, "type")))
            .collect()
    }

    /// Requests that ran to completion (were not aborted mid-flight).
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    fn reply_for(&self, request: &HttpGet) -> Option<MockReply> {
        let routes = self.routes.lock().unwrap();
        let url = request.url.to_string();
        routes
            .get(&(url.clone(), Some(param(request, "type"))))
            .or_else(|| routes.get(&(url, None)))
            .cloned()
    }
}

fn param(request: &HttpGet, key: &str) -> String {
    request
        .query
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

#[async_trait]
impl HttpRequester for MockHttpRequester {
    async fn get(&self, request: &HttpGet) -> Result<Bytes, DohError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.reply_for(request).unwrap_or_else(|| MockReply::fail("no route"));
        let result = match reply {
            MockReply::Body { body, delay } => {
                tokio::time::sleep(delay).await;
                Ok(Bytes::from(body))
            }
            MockReply::Fail { message, delay } => {
                tokio::time::sleep(delay).await;
                Err(DohError::Transport {
                    provider: Arc::clone(&request.url),
                    message,
                })
            }
            MockReply::Panic => panic!("mock provider blew up"),
        };

        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}
