use log::debug;

use super::{
    ResourceErrorView, ResourceErrorViewModel, ResourceLoadingView, ResourceLoadingViewModel,
    ResourceView,
};
use crate::error::Error;

/// Which terminal view model a finished load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    Content,
    Error,
}

/// Receives the lifecycle of one load.
///
/// [`LoadResourcePresentationAdapter`](super::LoadResourcePresentationAdapter)
/// guarantees the order: one `did_start_loading`, then at most one of the
/// two `did_finish_*` calls.
pub trait ResourcePresenter<Resource> {
    fn did_start_loading(&mut self);

    fn did_finish_loading_with(&mut self, resource: Resource) -> Presented;

    fn did_finish_loading_with_error(&mut self, error: &Error);
}

type Mapper<R, VM> = Box<dyn Fn(R) -> anyhow::Result<VM>>;

/// Presents any resource through an injected, possibly failing, mapper.
///
/// A mapper failure is shown exactly like a load failure.
pub struct LoadResourcePresenter<R, VM> {
    resource_view: Box<dyn ResourceView<ViewModel = VM>>,
    loading_view: Box<dyn ResourceLoadingView>,
    error_view: Box<dyn ResourceErrorView>,
    mapper: Mapper<R, VM>,
}

impl<R, VM> LoadResourcePresenter<R, VM> {
    /// Every failure kind shows this one message.
    pub const LOAD_ERROR: &'static str = "Couldn't connect to server";

    pub fn new<V, L, E, M>(resource_view: V, loading_view: L, error_view: E, mapper: M) -> Self
    where
        V: ResourceView<ViewModel = VM> + 'static,
        L: ResourceLoadingView + 'static,
        E: ResourceErrorView + 'static,
        M: Fn(R) -> anyhow::Result<VM> + 'static,
    {
        Self {
            resource_view: Box::new(resource_view),
            loading_view: Box::new(loading_view),
            error_view: Box::new(error_view),
            mapper: Box::new(mapper),
        }
    }

    fn present_failure(&mut self) {
        self.error_view
            .display(ResourceErrorViewModel::error(Self::LOAD_ERROR));
        self.loading_view
            .display(ResourceLoadingViewModel { is_loading: false });
    }
}

impl<R, VM> ResourcePresenter<R> for LoadResourcePresenter<R, VM> {
    fn did_start_loading(&mut self) {
        self.error_view.display(ResourceErrorViewModel::no_error());
        self.loading_view
            .display(ResourceLoadingViewModel { is_loading: true });
    }

    fn did_finish_loading_with(&mut self, resource: R) -> Presented {
        match (self.mapper)(resource) {
            Ok(view_model) => {
                self.resource_view.display(view_model);
                self.loading_view
                    .display(ResourceLoadingViewModel { is_loading: false });
                Presented::Content
            }
            Err(e) => {
                debug!("could not map loaded resource: {e:#}");
                self.present_failure();
                Presented::Error
            }
        }
    }

    fn did_finish_loading_with_error(&mut self, error: &Error) {
        debug!("load failed: {error}");
        self.present_failure();
    }
}
