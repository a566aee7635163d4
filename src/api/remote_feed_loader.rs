use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use super::{FeedItemsMapper, HttpClient};
use crate::error::{Error, Result};
use crate::feed::FeedImage;
use crate::loader::Loader;

/// Fetches the feed from a fixed endpoint.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl Loader for RemoteFeedLoader {
    type Input = ();
    type Output = Vec<FeedImage>;

    async fn load(&self, _: &()) -> Result<Vec<FeedImage>> {
        let (data, response) = self.client.get(&self.url).await.map_err(|e| {
            debug!("GET {} failed: {e:#}", self.url);
            Error::Connectivity
        })?;
        FeedItemsMapper::map(&data, &response)
    }
}
