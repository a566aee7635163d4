//! One row of the feed list and its lazily loaded image.
//!
//! A [`FeedImageCellController`] owns the cell view (behind an
//! `Rc<RefCell<_>>`) and the adapter that loads its image.  The presenter
//! only sees the cell through a [`WeakRefVirtualProxy`], so dropping the
//! controller tears the whole row down and cancels its load.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use image::{GenericImageView, ImageFormat};
use url::Url;

use livescroll_feed::feed::FeedImageDataLoader;
use livescroll_feed::presentation::{
    FeedImagePresenter, FeedImageView, FeedImageViewModel, LoadResourcePresentationAdapter,
    LoadState, LoadTicket, WeakRefVirtualProxy,
};
use livescroll_feed::{FeedImage, Result};

/// What the terminal can show of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImagePreview {
    /// `None` unless `data` is an image in a format we can decode.
    pub fn decode(data: &[u8]) -> Option<Self> {
        let format = image::guess_format(data).ok()?;
        let decoded = image::load_from_memory_with_format(data, format).ok()?;
        let (width, height) = decoded.dimensions();
        Some(Self {
            width,
            height,
            format,
        })
    }
}

/// The cell view: whatever the presenter last displayed.
pub struct FeedImageCell {
    view_model: FeedImageViewModel<ImagePreview>,
}

impl FeedImageCell {
    fn new(model: &FeedImage) -> Self {
        Self {
            view_model: FeedImageViewModel {
                description: model.description.clone(),
                location: model.location.clone(),
                image: None,
                is_loading: false,
                should_retry: false,
            },
        }
    }
}

impl FeedImageView for FeedImageCell {
    type Image = ImagePreview;

    fn display(&mut self, view_model: FeedImageViewModel<ImagePreview>) {
        self.view_model = view_model;
    }
}

type ImageAdapter = LoadResourcePresentationAdapter<
    dyn FeedImageDataLoader,
    FeedImagePresenter<WeakRefVirtualProxy<FeedImageCell>>,
>;

pub struct FeedImageCellController {
    url: Url,
    cell: Rc<RefCell<FeedImageCell>>,
    adapter: ImageAdapter,
}

impl FeedImageCellController {
    pub fn new(model: FeedImage, image_loader: Arc<dyn FeedImageDataLoader>) -> Self {
        let cell = Rc::new(RefCell::new(FeedImageCell::new(&model)));
        let url = model.url.clone();
        let presenter =
            FeedImagePresenter::new(WeakRefVirtualProxy::new(&cell), model, ImagePreview::decode);
        Self {
            url,
            cell,
            adapter: LoadResourcePresentationAdapter::new(image_loader, presenter),
        }
    }

    pub fn view_model(&self) -> FeedImageViewModel<ImagePreview> {
        self.cell.borrow().view_model.clone()
    }

    pub fn state(&self) -> LoadState {
        self.adapter.state()
    }

    /// Start loading the image unless it was already requested.
    pub fn request_image<D>(&mut self, deliver: D)
    where
        D: FnOnce(LoadTicket, Result<Vec<u8>>) + Send + 'static,
    {
        if self.state() == LoadState::Idle {
            self.adapter.load_resource(self.url.clone(), deliver);
        }
    }

    /// Reload after a failed attempt.
    pub fn retry<D>(&mut self, deliver: D)
    where
        D: FnOnce(LoadTicket, Result<Vec<u8>>) + Send + 'static,
    {
        if self.view_model().should_retry {
            self.adapter.load_resource(self.url.clone(), deliver);
        }
    }

    pub fn did_finish(&mut self, ticket: LoadTicket, result: Result<Vec<u8>>) {
        self.adapter.did_finish(ticket, result);
    }
}
