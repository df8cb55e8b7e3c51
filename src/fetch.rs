//! HTTP download of the dataset.
//!
//! The dataset is published as a plain CSV behind a static URL, so all this
//! module needs is a GET that either yields the full payload or an error.
//! [`HttpClient`] keeps the transport swappable at the seam.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

/// Plain [`reqwest`] client with no extra behavior.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

/// Fetches the complete payload at `url`.
///
/// Non-success statuses are errors: a 404 page must not end up in the CSV
/// parser looking like a corrupt dataset.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Bytes> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?)
}
