//! Local persistence of feeds and image bytes.
//!
//! Stores ([`FeedStore`], [`FeedImageDataStore`]) are dumb keyed storage.
//! All policy lives in the loaders on top of them:
//!
//! * [`LocalFeedLoader`] decides whether a cached feed is still fresh enough
//!   to serve (see [`FeedCachePolicy`]) and replaces it wholesale on save.
//! * [`LocalFeedImageDataLoader`] reads and writes image bytes by URL.
//!
//! The cached shape [`LocalFeedImage`] is deliberately a separate type from
//! [`FeedImage`] so the on-disk schema can evolve independently of the domain.

mod in_memory;
mod json_file;
mod local_feed_loader;
mod local_image_loader;
mod policy;

pub use in_memory::{InMemoryFeedImageDataStore, InMemoryFeedStore};
pub use json_file::JsonFileFeedStore;
pub use local_feed_loader::LocalFeedLoader;
pub use local_image_loader::LocalFeedImageDataLoader;
pub use policy::FeedCachePolicy;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::feed::FeedImage;

/// Cache-side mirror of [`FeedImage`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LocalFeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl From<&FeedImage> for LocalFeedImage {
    fn from(image: &FeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description.clone(),
            location: image.location.clone(),
            url: image.url.clone(),
        }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(local: LocalFeedImage) -> Self {
        FeedImage {
            id: local.id,
            description: local.description,
            location: local.location,
            url: local.url,
        }
    }
}

/// A feed snapshot as it sits in a [`FeedStore`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub feed: Vec<LocalFeedImage>,
    pub timestamp: DateTime<Utc>,
}

/// Keyless storage for a single feed snapshot.
///
/// Implementations must be safe to call from several in-flight loads at
/// once.  `insert` replaces whatever was stored; it never merges.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// `Ok(None)` means nothing is stored.
    async fn retrieve(&self) -> Result<Option<CachedFeed>>;

    async fn insert(&self, feed: &[LocalFeedImage], timestamp: DateTime<Utc>) -> Result<()>;

    /// Succeeds when nothing is stored.
    async fn delete_cached_feed(&self) -> Result<()>;
}

/// Image bytes keyed by the URL they were loaded from.
#[async_trait]
pub trait FeedImageDataStore: Send + Sync {
    /// `Ok(None)` means no bytes are stored for `url`.
    async fn retrieve(&self, url: &Url) -> Result<Option<Vec<u8>>>;

    async fn insert(&self, data: &[u8], url: &Url) -> Result<()>;
}
