//! Mock directory service for testing the HTTP source.

#![allow(dead_code)]

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the `/search` endpoint answers.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockReply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "mock failure"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

struct MockState {
    reply: MockReply,
    queries: Mutex<Vec<Option<String>>>,
}

pub struct MockDirectory {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockDirectory {
    pub async fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            reply,
            queries: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/search", get(search))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock directory");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw query strings received so far.
    pub async fn queries(&self) -> Vec<Option<String>> {
        self.state.queries.lock().await.clone()
    }
}

async fn search(State(state): State<Arc<MockState>>, RawQuery(query): RawQuery) -> Response {
    state.queries.lock().await.push(query);
    let reply = state.reply.clone();
    if reply.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(reply.delay_ms)).await;
    }
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// A local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
