use log::debug;

use super::{FeedImageView, FeedImageViewModel, Presented, ResourcePresenter};
use crate::error::Error;
use crate::feed::FeedImage;

type ImageTransformer<Image> = Box<dyn Fn(&[u8]) -> Option<Image>>;

/// Drives one feed cell through its image load.
///
/// Bytes that the transformer cannot turn into an `Image` are treated like
/// a failed load: the cell offers a retry.
pub struct FeedImagePresenter<V: FeedImageView> {
    view: V,
    model: FeedImage,
    image_transformer: ImageTransformer<V::Image>,
}

impl<V: FeedImageView> FeedImagePresenter<V> {
    pub fn new<T>(view: V, model: FeedImage, image_transformer: T) -> Self
    where
        T: Fn(&[u8]) -> Option<V::Image> + 'static,
    {
        Self {
            view,
            model,
            image_transformer: Box::new(image_transformer),
        }
    }

    fn view_model(
        &self,
        image: Option<V::Image>,
        is_loading: bool,
        should_retry: bool,
    ) -> FeedImageViewModel<V::Image> {
        FeedImageViewModel {
            description: self.model.description.clone(),
            location: self.model.location.clone(),
            image,
            is_loading,
            should_retry,
        }
    }
}

impl<V: FeedImageView> ResourcePresenter<Vec<u8>> for FeedImagePresenter<V> {
    fn did_start_loading(&mut self) {
        let view_model = self.view_model(None, true, false);
        self.view.display(view_model);
    }

    fn did_finish_loading_with(&mut self, data: Vec<u8>) -> Presented {
        match (self.image_transformer)(&data) {
            Some(image) => {
                let view_model = self.view_model(Some(image), false, false);
                self.view.display(view_model);
                Presented::Content
            }
            None => {
                debug!("{} bytes from {} are not an image", data.len(), self.model.url);
                let view_model = self.view_model(None, false, true);
                self.view.display(view_model);
                Presented::Error
            }
        }
    }

    fn did_finish_loading_with_error(&mut self, error: &Error) {
        debug!("image load from {} failed: {error}", self.model.url);
        let view_model = self.view_model(None, false, true);
        self.view.display(view_model);
    }
}
