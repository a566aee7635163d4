use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use super::HttpClient;
use crate::error::{Error, Result};
use crate::loader::Loader;

/// Downloads image bytes.  A 200 with an empty body is invalid.
pub struct RemoteFeedImageDataLoader {
    client: Arc<dyn HttpClient>,
}

impl RemoteFeedImageDataLoader {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Loader for RemoteFeedImageDataLoader {
    type Input = Url;
    type Output = Vec<u8>;

    async fn load(&self, url: &Url) -> Result<Vec<u8>> {
        let (data, response) = self.client.get(url).await.map_err(|e| {
            debug!("GET {url} failed: {e:#}");
            Error::Connectivity
        })?;

        if !response.is_ok() || data.is_empty() {
            debug!(
                "image response from {url} unusable (status {}, {} bytes)",
                response.status,
                data.len()
            );
            return Err(Error::InvalidData);
        }
        Ok(data)
    }
}
