//! In-process mock backend for client integration tests.
//!
//! Binds an axum server on `127.0.0.1:0`, records every request it receives
//! and answers with whatever the test's responder returns.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use fieldops_client::{ApiClient, ClientConfig};

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

type Responder = dyn Fn(&Captured) -> Response + Send + Sync;

struct MockState {
    captured: Mutex<Vec<Captured>>,
    responder: Box<Responder>,
}

pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    /// Start a server answering every request with `responder`.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Captured) -> Response + Send + Sync + 'static,
    {
        let state = Arc::new(MockState {
            captured: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Start a server that answers `200 {"data": null}` to everything.
    pub async fn ok() -> Self {
        Self::start(|_| json_response(StatusCode::OK, serde_json::json!({ "data": null }))).await
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.base_url.clone())).expect("build client")
    }

    pub fn client_with_token(&self, token: &str) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.base_url.clone()).with_token(token))
            .expect("build client")
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn last(&self) -> Captured {
        self.requests()
            .pop()
            .expect("mock server received no requests")
    }
}

async fn record(State(state): State<Arc<MockState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map(|b| b.to_vec())
        .unwrap_or_default();

    let captured = Captured {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    };

    let response = (state.responder)(&captured);
    state.captured.lock().unwrap().push(captured);
    response
}

pub fn json_response(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

pub fn bytes_response(content_type: &'static str, bytes: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(bytes))
        .expect("valid response")
}

pub fn tenant_json(id: i64) -> Value {
    serde_json::json!({
        "id": id,
        "name": "Branch Malang",
        "slug": "branch-malang",
        "logo": null,
        "address": "Jl. Ijen 1",
        "phone": "0341123456",
        "is_active": true,
        "deleted_at": null,
        "created_at": "2025-01-10T08:00:00Z",
        "updated_at": "2025-01-10T08:00:00Z"
    })
}
