use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;

use super::{
    FeedImageView, FeedImageViewModel, ResourceErrorView, ResourceErrorViewModel,
    ResourceLoadingView, ResourceLoadingViewModel, ResourceView,
};

/// Forwards view calls to an object it does not own.
///
/// Once the last `Rc` to the target is dropped every call becomes a no-op,
/// so presenters and adapters can outlive the view they were built for.
///
/// Calls must not re-enter a target that is already mutably borrowed. Such a
/// call is dropped with a warning rather than panicking on the `RefCell`;
/// later calls are forwarded again once the borrow ends.
pub struct WeakRefVirtualProxy<T> {
    object: Weak<RefCell<T>>,
}

impl<T> WeakRefVirtualProxy<T> {
    pub fn new(object: &Rc<RefCell<T>>) -> Self {
        Self {
            object: Rc::downgrade(object),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.object.strong_count() > 0
    }

    fn forward(&self, call: impl FnOnce(&mut T)) {
        let Some(object) = self.object.upgrade() else {
            return;
        };
        match object.try_borrow_mut() {
            Ok(mut target) => call(&mut target),
            Err(_) => warn!("view is already borrowed, dropping display call"),
        };
    }
}

impl<T> Clone for WeakRefVirtualProxy<T> {
    fn clone(&self) -> Self {
        Self {
            object: Weak::clone(&self.object),
        }
    }
}

impl<T: ResourceView> ResourceView for WeakRefVirtualProxy<T> {
    type ViewModel = T::ViewModel;

    fn display(&mut self, view_model: T::ViewModel) {
        self.forward(|target| ResourceView::display(target, view_model));
    }
}

impl<T: ResourceLoadingView> ResourceLoadingView for WeakRefVirtualProxy<T> {
    fn display(&mut self, view_model: ResourceLoadingViewModel) {
        self.forward(|target| ResourceLoadingView::display(target, view_model));
    }
}

impl<T: ResourceErrorView> ResourceErrorView for WeakRefVirtualProxy<T> {
    fn display(&mut self, view_model: ResourceErrorViewModel) {
        self.forward(|target| ResourceErrorView::display(target, view_model));
    }
}

impl<T: FeedImageView> FeedImageView for WeakRefVirtualProxy<T> {
    type Image = T::Image;

    fn display(&mut self, view_model: FeedImageViewModel<T::Image>) {
        self.forward(|target| FeedImageView::display(target, view_model));
    }
}
