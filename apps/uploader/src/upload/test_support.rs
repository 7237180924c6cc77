//! In-process stand-in for the parsing service, used by the HTTP tests.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

pub struct MockParseServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

impl MockParseServer {
    /// Multipart parts of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn parse_resume(State(state): State<MockState>, mut multipart: Multipart) -> impl IntoResponse {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        parts.push(ReceivedPart {
            field: name,
            file_name,
            content_type,
            bytes,
        });
    }
    state.requests.lock().unwrap().push(parts);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Serves `POST /parse_resume/` on an ephemeral port, answering every request
/// with the given status and body.
pub async fn spawn_mock_server(status: StatusCode, body: &'static str) -> MockParseServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body,
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/parse_resume/", post(parse_resume))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockParseServer {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// A base URL nothing is listening on.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
