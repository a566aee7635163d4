//! Builds the loader chains and the feed screen's presentation graph.
//!
//! ```text
//! feed:   Fallback( Caching(Remote → Local), Local )
//! images: Fallback( Local, Caching(Remote → Local) )
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use url::Url;

use livescroll_feed::api::{HttpClient, RemoteFeedImageDataLoader, RemoteFeedLoader};
use livescroll_feed::cache::{
    FeedImageDataStore, FeedStore, LocalFeedImageDataLoader, LocalFeedLoader,
};
use livescroll_feed::feed::{FeedImageDataLoader, FeedLoader};
use livescroll_feed::presentation::{
    FeedPresenter, FeedViewModel, LoadResourcePresentationAdapter, LoadResourcePresenter,
    ResourceView, WeakRefVirtualProxy,
};
use livescroll_feed::{CachingLoader, FallbackLoader, FeedImage};

use crate::app::App;
use crate::cell::FeedImageCellController;

pub struct Loaders {
    pub feed: Arc<dyn FeedLoader>,
    pub images: Arc<dyn FeedImageDataLoader>,
    /// Kept separately so the cache can be validated on shutdown.
    pub local_feed: Arc<LocalFeedLoader>,
}

pub fn compose_loaders(
    url: Url,
    client: Arc<dyn HttpClient>,
    feed_store: Arc<dyn FeedStore>,
    image_store: Arc<dyn FeedImageDataStore>,
) -> Loaders {
    let local_feed = Arc::new(LocalFeedLoader::with_system_clock(feed_store));
    let remote_feed = RemoteFeedLoader::new(url, Arc::clone(&client));
    let feed = FallbackLoader::new(
        CachingLoader::new(remote_feed, Arc::clone(&local_feed)),
        Arc::clone(&local_feed),
    );

    let local_images = Arc::new(LocalFeedImageDataLoader::new(image_store));
    let remote_images = RemoteFeedImageDataLoader::new(client);
    let images = FallbackLoader::new(
        Arc::clone(&local_images),
        CachingLoader::new(remote_images, local_images),
    );

    Loaders {
        feed: Arc::new(feed),
        images: Arc::new(images),
        local_feed,
    }
}

/// Turns a loaded feed into one cell controller per image and hands them to
/// the app, if it is still alive.
pub struct FeedViewAdapter {
    controller: WeakRefVirtualProxy<App>,
    image_loader: Arc<dyn FeedImageDataLoader>,
}

impl FeedViewAdapter {
    pub fn new(controller: WeakRefVirtualProxy<App>, image_loader: Arc<dyn FeedImageDataLoader>) -> Self {
        Self {
            controller,
            image_loader,
        }
    }
}

impl ResourceView for FeedViewAdapter {
    type ViewModel = FeedViewModel;

    fn display(&mut self, view_model: FeedViewModel) {
        let cells = view_model
            .feed
            .into_iter()
            .map(|model| FeedImageCellController::new(model, Arc::clone(&self.image_loader)))
            .collect();
        ResourceView::display(&mut self.controller, cells);
    }
}

pub type FeedAdapter =
    LoadResourcePresentationAdapter<dyn FeedLoader, LoadResourcePresenter<Vec<FeedImage>, FeedViewModel>>;

/// Wire the feed screen.  The app is only referenced weakly.
pub fn feed_adapter(app: &Rc<RefCell<App>>, loaders: &Loaders) -> FeedAdapter {
    let presenter = LoadResourcePresenter::new(
        FeedViewAdapter::new(WeakRefVirtualProxy::new(app), Arc::clone(&loaders.images)),
        WeakRefVirtualProxy::new(app),
        WeakRefVirtualProxy::new(app),
        |feed: Vec<FeedImage>| Ok(FeedPresenter::map(feed)),
    );
    LoadResourcePresentationAdapter::new(Arc::clone(&loaders.feed), presenter)
}
