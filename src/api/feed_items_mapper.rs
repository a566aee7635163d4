use log::debug;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use super::HttpResponse;
use crate::error::{Error, Result};
use crate::feed::FeedImage;

/// Wire shape of one feed entry.
#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.image,
        }
    }
}

/// Turns a feed response into domain values.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Anything but a 200 carrying a JSON array of well-formed items is
    /// [`Error::InvalidData`].  One bad item rejects the whole batch.
    pub fn map(data: &[u8], response: &HttpResponse) -> Result<Vec<FeedImage>> {
        if !response.is_ok() {
            debug!("feed response from {} had status {}", response.url, response.status);
            return Err(Error::InvalidData);
        }

        let items: Vec<RemoteFeedItem> = serde_json::from_slice(data).map_err(|e| {
            debug!("feed response from {} did not decode: {e}", response.url);
            Error::InvalidData
        })?;

        Ok(items.into_iter().map(FeedImage::from).collect())
    }
}
