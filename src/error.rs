use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("sending request to {url} failed! status code: {status}")]
    Status { url: Url, status: StatusCode },

    #[error("sending request to {url} failed: {source}")]
    Request { url: Url, source: reqwest::Error },

    #[error("unexpected response from {url}: {reason}")]
    Schema { url: Url, reason: String },

    #[error("failed to start the HTTP runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid report template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render report: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl InventoryError {
    pub fn schema(url: &Url, reason: impl Into<String>) -> Self {
        InventoryError::Schema {
            url: url.clone(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
