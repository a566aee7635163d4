use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use super::FeedImageDataStore;
use crate::error::{Error, Result};
use crate::loader::{Loader, ResourceCache};

/// Reads and writes image bytes in a [`FeedImageDataStore`].
pub struct LocalFeedImageDataLoader {
    store: Arc<dyn FeedImageDataStore>,
}

impl LocalFeedImageDataLoader {
    pub fn new(store: Arc<dyn FeedImageDataStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, data: &[u8], url: &Url) -> Result<()> {
        self.store.insert(data, url).await.map_err(Error::Store)
    }
}

#[async_trait]
impl Loader for LocalFeedImageDataLoader {
    type Input = Url;
    type Output = Vec<u8>;

    async fn load(&self, url: &Url) -> Result<Vec<u8>> {
        match self.store.retrieve(url).await.map_err(Error::Store)? {
            Some(data) => {
                debug!("image cache hit for {url}");
                Ok(data)
            }
            None => {
                debug!("image cache miss for {url}");
                Err(Error::NotFound)
            }
        }
    }
}

#[async_trait]
impl ResourceCache for LocalFeedImageDataLoader {
    type Input = Url;
    type Resource = Vec<u8>;

    async fn save(&self, url: &Url, data: &Vec<u8>) -> Result<()> {
        LocalFeedImageDataLoader::save(self, data, url).await
    }
}
