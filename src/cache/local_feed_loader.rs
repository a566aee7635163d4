use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::{FeedCachePolicy, FeedStore, LocalFeedImage};
use crate::error::{Error, Result};
use crate::feed::FeedImage;
use crate::loader::{Loader, ResourceCache};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Cache engine over a [`FeedStore`].
///
/// * `load` serves the stored feed while it is fresh.  A stale or missing
///   snapshot is an empty success; only a failing store is an error.
/// * `save` replaces the snapshot: delete first, then insert.  The two
///   steps are not atomic, so a failed insert leaves the cache empty.
/// * `validate_cache` is the only path that purges stale or unreadable
///   snapshots; `load` never deletes anything.
pub struct LocalFeedLoader {
    store: Arc<dyn FeedStore>,
    current_date: Clock,
}

impl LocalFeedLoader {
    pub fn new<F>(store: Arc<dyn FeedStore>, current_date: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            store,
            current_date: Box::new(current_date),
        }
    }

    pub fn with_system_clock(store: Arc<dyn FeedStore>) -> Self {
        Self::new(store, Utc::now)
    }

    /// Replace the cached snapshot with `feed`, stamped with the current date.
    pub async fn save(&self, feed: &[FeedImage]) -> Result<()> {
        self.store.delete_cached_feed().await.map_err(Error::Store)?;

        let local: Vec<LocalFeedImage> = feed.iter().map(LocalFeedImage::from).collect();
        self.store
            .insert(&local, (self.current_date)())
            .await
            .map_err(Error::Store)?;
        debug!("cached {} feed images", local.len());
        Ok(())
    }

    /// Delete the snapshot if it cannot be read or has expired.
    pub async fn validate_cache(&self) -> Result<()> {
        match self.store.retrieve().await {
            Err(e) => {
                warn!("cached feed unreadable ({e:#}), deleting it");
                self.store.delete_cached_feed().await.map_err(Error::Store)
            }
            Ok(Some(cache)) if !FeedCachePolicy::validate(cache.timestamp, (self.current_date)()) => {
                warn!("cached feed from {} expired, deleting it", cache.timestamp);
                self.store.delete_cached_feed().await.map_err(Error::Store)
            }
            Ok(_) => Ok(()),
        }
    }
}

#[async_trait]
impl Loader for LocalFeedLoader {
    type Input = ();
    type Output = Vec<FeedImage>;

    async fn load(&self, _: &()) -> Result<Vec<FeedImage>> {
        match self.store.retrieve().await.map_err(Error::Store)? {
            Some(cache) if FeedCachePolicy::validate(cache.timestamp, (self.current_date)()) => {
                debug!("serving {} feed images from cache", cache.feed.len());
                Ok(cache.feed.into_iter().map(FeedImage::from).collect())
            }
            Some(_) => {
                debug!("cached feed expired, serving empty feed");
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl ResourceCache for LocalFeedLoader {
    type Input = ();
    type Resource = Vec<FeedImage>;

    async fn save(&self, _: &(), feed: &Vec<FeedImage>) -> Result<()> {
        LocalFeedLoader::save(self, feed).await
    }
}
