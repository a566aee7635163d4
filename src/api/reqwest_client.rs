use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use super::{HttpClient, HttpResponse};

/// [`HttpClient`] over a shared [`reqwest::Client`] connection pool.
///
/// Every request is bounded by a timeout; a server that accepts the
/// connection and never answers fails the request like any other transport
/// error.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<(Vec<u8>, HttpResponse)> {
        let response = self.client.get(url.clone()).send().await?;
        let meta = HttpResponse {
            status: response.status().as_u16(),
            url: response.url().clone(),
        };
        let body = response.bytes().await?;
        Ok((body.to_vec(), meta))
    }
}
