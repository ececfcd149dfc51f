#![allow(dead_code)]

use assert_cmd::Command;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

pub const USER_BODY: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "node_id": "MDQ6VXNlcjU4MzIzMQ==",
    "type": "User",
    "site_admin": false,
    "name": "The Octocat",
    "company": "@github",
    "blog": "https://github.blog",
    "location": "San Francisco",
    "public_repos": 8,
    "followers": 9000,
    "created_at": "2011-01-25T18:44:36Z",
    "updated_at": "2024-03-01T10:00:00Z"
}"#;

#[allow(deprecated)]
pub fn get_inspector_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("github-token-inspector")
}

/// The inspector binary with token, API URL and proxy variables cleared.
pub fn inspector() -> Command {
    let mut cmd = Command::new(get_inspector_bin());
    for var in [
        "GITHUB_TOKEN",
        "GITHUB_API_URL",
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Parse the single stdout line of a finished run.
pub fn report_of(stdout: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(stdout).expect("stdout is UTF-8");
    assert_eq!(text.lines().count(), 1, "expected exactly one line: {text:?}");
    serde_json::from_str(text.trim_end()).expect("stdout is JSON")
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    pub delay: Duration,
}

impl CannedResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A local HTTP server answering every request with the same canned response.
pub struct MockApi {
    // Dropping the runtime stops the server.
    _runtime: Runtime,
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn start(canned: CannedResponse) -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("bind mock API");
        let addr = listener.local_addr().expect("mock API address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let canned = Arc::new(canned);

        runtime.spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let canned = canned.clone();
                let recorded = recorded.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        recorded.lock().unwrap().push(record(&req));
                        respond(canned.clone())
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            _runtime: runtime,
            addr,
            requests,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn record(req: &Request<Incoming>) -> RecordedRequest {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    RecordedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        authorization: header("authorization"),
        accept: header("accept"),
        user_agent: header("user-agent"),
    }
}

async fn respond(canned: Arc<CannedResponse>) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
    tokio::time::sleep(canned.delay).await;

    let mut builder = Response::builder().status(canned.status);
    for (name, value) in &canned.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder.body(Full::new(Bytes::from(canned.body.clone())))
}

/// An address that refuses connections.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}
