//! In-memory and loopback stand-ins for the testbed API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Url;
use serde_json::Value;

use crate::error::{InventoryError, Result};
use crate::transport::Fetch;

pub const BASE_URL: &str = "http://testbed.invalid";

/// Documents keyed by URL path. Unknown paths answer 404.
#[derive(Debug, Default)]
pub struct FakeApi {
    documents: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(path.to_string(), document);
        self
    }

    /// Paths fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Serves the documents over HTTP on a loopback port and returns its base
    /// URL. The server lives until the test process exits.
    pub fn serve(&self) -> Url {
        let documents = Arc::new(self.documents.clone());
        let app = axum::Router::new().fallback(lookup).with_state(documents);

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().unwrap();
        Url::parse(&format!("http://{addr}")).unwrap()
    }
}

impl Fetch for FakeApi {
    fn fetch(&self, url: &Url) -> Result<Value> {
        self.requests.borrow_mut().push(url.path().to_string());
        self.documents
            .get(url.path())
            .cloned()
            .ok_or_else(|| InventoryError::Status {
                url: url.clone(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}

async fn lookup(State(documents): State<Arc<HashMap<String, Value>>>, uri: Uri) -> Response {
    match documents.get(uri.path()) {
        Some(document) => Json(document.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
