//! Remote loading over HTTP.
//!
//! The transport is abstracted behind [`HttpClient`]; loaders here only
//! interpret responses.  Nothing in this module caches: write-through is
//! composed on top with [`crate::loader::CachingLoader`].

mod feed_items_mapper;
mod remote_feed_loader;
mod remote_image_loader;
mod reqwest_client;

pub use feed_items_mapper::FeedItemsMapper;
pub use remote_feed_loader::RemoteFeedLoader;
pub use remote_image_loader::RemoteFeedImageDataLoader;
pub use reqwest_client::ReqwestHttpClient;

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// Status line metadata of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub url: Url,
}

impl HttpResponse {
    pub const OK_200: u16 = 200;

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK_200
    }
}

/// Performs a single GET.
///
/// `Err` means no usable response arrived at all; any received response,
/// whatever its status, is `Ok`.  Must be safe for concurrent use.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<(Vec<u8>, HttpResponse)>;
}
