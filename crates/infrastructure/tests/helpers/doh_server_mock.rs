use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const DNS_JSON: &str = "application/dns-json";

#[derive(Debug, Deserialize)]
struct DohParams {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
}

/// Local DoH JSON endpoint serving a tiny fixed zone.
///
/// Routes:
/// - `/dns-query` answers from the zone, `{"Status":3}` for anything else
/// - `/slow` answers like `/dns-query` after two seconds
/// - `/error` always returns HTTP 500
/// - `/garbage` returns a non-JSON body
pub struct MockDohServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let hits = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/dns-query", get(answer))
            .route("/slow", get(slow_answer))
            .route("/error", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/garbage", get(|| async { "<html>oops</html>" }))
            .with_state(Arc::clone(&hits));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// A URL on a port nobody listens on.
    pub async fn dead_url() -> String {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/dns-query", addr)
    }

    fn zone(name: &str, record_type: &str) -> String {
        let data = match (name, record_type) {
            ("dohtest.example", "A") => "2.2.2.2",
            ("dohtest.example", "AAAA") => "2::2",
            ("dohtest.example", "TXT") => r#"\"dohtest\""#,
            ("_ldap._tcp.example.com", "SRV") => "0 5 389 ldap.example.com.",
            _ => return r#"{"Status":3,"Comment":"NXDOMAIN"}"#.to_string(),
        };
        format!(
            r#"{{"Status":0,"TC":false,"RD":true,"RA":true,"AD":false,"CD":false,"Question":[{{"name":"{name}.","type":"{record_type}"}}],"Answer":[{{"name":"{name}.","type":"{record_type}","TTL":60,"data":"{data}"}}]}}"#
        )
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn answer(
    State(hits): State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    Query(params): Query<DohParams>,
) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if accept != DNS_JSON {
        return (StatusCode::NOT_ACCEPTABLE, [(header::CONTENT_TYPE, "text/plain")], String::new());
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, DNS_JSON)],
        MockDohServer::zone(&params.name, &params.record_type),
    )
}

async fn slow_answer(
    state: State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    params: Query<DohParams>,
) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(2)).await;
    answer(state, headers, params).await
}
