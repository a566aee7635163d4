use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{CachedFeed, FeedStore, LocalFeedImage};

/// [`FeedStore`] backed by a single JSON file.
///
/// Reads may run concurrently; inserts and deletes take the lock
/// exclusively.  A missing file is an empty store; a file that does not
/// parse is an error (and is what `validate_cache` will delete).
#[derive(Debug)]
pub struct JsonFileFeedStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileFeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedStore for JsonFileFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        let _guard = self.lock.read().await;
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let cache = serde_json::from_slice(&bytes)
            .with_context(|| format!("decoding {}", self.path.display()))?;
        Ok(Some(cache))
    }

    async fn insert(&self, feed: &[LocalFeedImage], timestamp: DateTime<Utc>) -> Result<()> {
        let _guard = self.lock.write().await;
        let cache = CachedFeed {
            feed: feed.to_vec(),
            timestamp,
        };
        let bytes = serde_json::to_vec(&cache)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("writing {}", self.path.display()))
    }

    async fn delete_cached_feed(&self) -> Result<()> {
        let _guard = self.lock.write().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}
