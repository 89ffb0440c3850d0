use reqwest::Url;
use serde_json::Value;

use crate::error::{InventoryError, Result};

/// Something that can turn an absolute URL into a parsed JSON document.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Value>;
}

/// Blocking HTTP GET on top of reqwest. Requests are issued one at a time on
/// a private current-thread runtime.
pub struct HttpFetcher {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(InventoryError::Client)?;

        Ok(Self { runtime, client })
    }

    async fn get(&self, url: &Url) -> Result<Value> {
        let request_failed = |source| InventoryError::Request {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::Status {
                url: url.clone(),
                status,
            });
        }

        response.json::<Value>().await.map_err(request_failed)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Value> {
        tracing::debug!(%url, "GET");
        self.runtime.block_on(self.get(url))
    }
}
