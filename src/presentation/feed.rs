use crate::feed::FeedImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedViewModel {
    pub feed: Vec<FeedImage>,
}

/// Feed-screen strings and the feed resource mapping.
pub struct FeedPresenter;

impl FeedPresenter {
    pub fn title() -> &'static str {
        "My Feed"
    }

    pub fn map(feed: Vec<FeedImage>) -> FeedViewModel {
        FeedViewModel { feed }
    }
}
