use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use super::{CachedFeed, FeedImageDataStore, FeedStore, LocalFeedImage};

/// Process-local [`FeedStore`]; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    cache: Mutex<Option<CachedFeed>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        let cache = self.cache.lock().map_err(|_| anyhow!("feed store lock poisoned"))?;
        Ok(cache.clone())
    }

    async fn insert(&self, feed: &[LocalFeedImage], timestamp: DateTime<Utc>) -> Result<()> {
        let mut cache = self.cache.lock().map_err(|_| anyhow!("feed store lock poisoned"))?;
        *cache = Some(CachedFeed {
            feed: feed.to_vec(),
            timestamp,
        });
        Ok(())
    }

    async fn delete_cached_feed(&self) -> Result<()> {
        let mut cache = self.cache.lock().map_err(|_| anyhow!("feed store lock poisoned"))?;
        *cache = None;
        Ok(())
    }
}

/// Process-local [`FeedImageDataStore`].
#[derive(Debug, Default)]
pub struct InMemoryFeedImageDataStore {
    images: Mutex<HashMap<Url, Vec<u8>>>,
}

impl InMemoryFeedImageDataStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedImageDataStore for InMemoryFeedImageDataStore {
    async fn retrieve(&self, url: &Url) -> Result<Option<Vec<u8>>> {
        let images = self.images.lock().map_err(|_| anyhow!("image store lock poisoned"))?;
        Ok(images.get(url).cloned())
    }

    async fn insert(&self, data: &[u8], url: &Url) -> Result<()> {
        let mut images = self.images.lock().map_err(|_| anyhow!("image store lock poisoned"))?;
        images.insert(url.clone(), data.to_vec());
        Ok(())
    }
}
