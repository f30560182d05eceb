//! In-process package index serving PyPI JSON documents from memory.
//!
//! Answers `GET /pypi/<name>/json` with the registered reply, and with a 404
//! carrying `{"message": "Not Found"}` for unknown names, like pypi.org does.
//! The server runs on its own thread and runtime so that both async tests and
//! plain `#[test]` CLI runs can use it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc};
use std::thread;

/// What the index answers for one package
#[derive(Debug, Clone)]
pub enum Reply {
    /// `200 OK` with a JSON body
    Document(Value),
    /// Arbitrary status with a plain-text body
    Raw(StatusCode, String),
}

pub struct FakeIndexServer {
    base_url: String,
}

impl FakeIndexServer {
    /// Serves every document with `200 OK`
    pub fn start(documents: HashMap<String, Value>) -> Self {
        Self::with_replies(
            documents
                .into_iter()
                .map(|(name, document)| (name, Reply::Document(document)))
                .collect(),
        )
    }

    pub fn with_replies(replies: HashMap<String, Reply>) -> Self {
        let app = Router::new()
            .route("/pypi/:name/json", get(metadata))
            .with_state(Arc::new(replies));

        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build index server runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind index server");
                addr_tx
                    .send(listener.local_addr().expect("Listener has no address"))
                    .expect("Test thread stopped waiting for the index server");
                axum::serve(listener, app)
                    .await
                    .expect("Index server stopped");
            });
        });

        let addr = addr_rx.recv().expect("Index server failed to start");
        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builds the document the index serves for a package with one artifact
pub fn package_document(version: &str, size: u64, requires_dist: &[&str]) -> Value {
    json!({
        "info": {"version": version, "requires_dist": requires_dist},
        "releases": {version: [{"size": size}]}
    })
}

async fn metadata(
    State(replies): State<Arc<HashMap<String, Reply>>>,
    Path(name): Path<String>,
) -> Response {
    match replies.get(&name) {
        Some(Reply::Document(document)) => Json(document.clone()).into_response(),
        Some(Reply::Raw(status, body)) => (*status, body.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Not Found"})),
        )
            .into_response(),
    }
}
