//! Presentation: turning load results into view models.
//!
//! ```text
//!  UI event ─► LoadResourcePresentationAdapter ─► Loader (LoadTask)
//!                     │        ▲
//!                     │        └── did_finish(ticket, result)  (re-dispatched by caller)
//!                     ▼
//!              ResourcePresenter ─► ResourceView / ResourceLoadingView / ResourceErrorView
//! ```
//!
//! Presenters only know the view traits below, never a concrete renderer.
//! Views are usually handed over wrapped in a [`WeakRefVirtualProxy`] so a
//! presenter never keeps a torn-down view alive.

mod adapter;
mod feed;
mod feed_image;
mod load_resource;
mod weak_proxy;

pub use adapter::{LoadResourcePresentationAdapter, LoadState, LoadTicket};
pub use feed::{FeedPresenter, FeedViewModel};
pub use feed_image::FeedImagePresenter;
pub use load_resource::{LoadResourcePresenter, Presented, ResourcePresenter};
pub use weak_proxy::WeakRefVirtualProxy;

/// Whether a load is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLoadingViewModel {
    pub is_loading: bool,
}

/// The error banner contents; `None` means no error is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceErrorViewModel {
    pub message: Option<String>,
}

impl ResourceErrorViewModel {
    pub fn no_error() -> Self {
        Self { message: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

pub type FeedLoadingViewModel = ResourceLoadingViewModel;
pub type FeedErrorViewModel = ResourceErrorViewModel;

/// Everything a feed cell shows.  Rebuilt on every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImageViewModel<Image> {
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<Image>,
    pub is_loading: bool,
    pub should_retry: bool,
}

impl<Image> FeedImageViewModel<Image> {
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }
}

pub trait ResourceView {
    type ViewModel;

    fn display(&mut self, view_model: Self::ViewModel);
}

pub trait ResourceLoadingView {
    fn display(&mut self, view_model: ResourceLoadingViewModel);
}

pub trait ResourceErrorView {
    fn display(&mut self, view_model: ResourceErrorViewModel);
}

pub trait FeedImageView {
    type Image;

    fn display(&mut self, view_model: FeedImageViewModel<Self::Image>);
}
