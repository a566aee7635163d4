//! Feed domain: the [`FeedImage`] value and the loader/cache capabilities
//! expressed in terms of it.
//!
//! The capability traits here are aliases over the generic
//! [`Loader`]/[`ResourceCache`] traits, so every decorator in
//! [`crate::loader`] works for feeds and image bytes alike.

mod feed_image;

pub use feed_image::{FeedImage, FeedItem};

use url::Url;

use crate::loader::{Loader, ResourceCache};

/// Loads the whole feed.  Takes no input; call as `loader.load(&())`.
pub trait FeedLoader: Loader<Input = (), Output = Vec<FeedImage>> {}

impl<T> FeedLoader for T where T: Loader<Input = (), Output = Vec<FeedImage>> + ?Sized {}

/// Loads raw image bytes for one URL.
pub trait FeedImageDataLoader: Loader<Input = Url, Output = Vec<u8>> {}

impl<T> FeedImageDataLoader for T where T: Loader<Input = Url, Output = Vec<u8>> + ?Sized {}

/// Persists a freshly loaded feed.
pub trait FeedCache: ResourceCache<Input = (), Resource = Vec<FeedImage>> {}

impl<T> FeedCache for T where T: ResourceCache<Input = (), Resource = Vec<FeedImage>> + ?Sized {}

/// Persists freshly loaded image bytes under their URL.
pub trait FeedImageDataCache: ResourceCache<Input = Url, Resource = Vec<u8>> {}

impl<T> FeedImageDataCache for T where T: ResourceCache<Input = Url, Resource = Vec<u8>> + ?Sized {}
