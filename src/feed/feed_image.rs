//! The core domain value shared by every loader and presenter.
//!
//! `FeedImage` is what the rest of the crate talks about.  The wire shape
//! ([`crate::api`]) and the cache shape ([`crate::cache::LocalFeedImage`]) are
//! separate types that convert into it, so neither schema leaks into the
//! domain.

use url::Url;
use uuid::Uuid;

/// A single feed entry: an image with optional caption fields.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FeedImage {
    /// Stable identifier assigned by the feed server.
    pub id: Uuid,

    /// Optional caption text.
    pub description: Option<String>,

    /// Optional human-readable place name.
    pub location: Option<String>,

    /// Where the image bytes live.
    pub url: Url,
}

/// Older name for [`FeedImage`], kept for callers that think in feed items.
pub type FeedItem = FeedImage;

impl FeedImage {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}
