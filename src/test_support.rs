//! Spies, stubs and fixtures shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use url::Url;
use uuid::Uuid;

use crate::api::{HttpClient, HttpResponse};
use crate::cache::{CachedFeed, FeedImageDataStore, FeedStore, LocalFeedImage};
use crate::error::{Error, Result};
use crate::feed::FeedImage;
use crate::loader::{Loader, ResourceCache};
use crate::presentation::{
    FeedImageView, FeedImageViewModel, ResourceErrorView, ResourceErrorViewModel, ResourceLoadingView, ResourceLoadingViewModel,
    ResourceView,
};

pub fn any_url() -> Url {
    Url::parse("https://any-url.com").unwrap()
}

pub fn any_data() -> Vec<u8> {
    b"any data".to_vec()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

pub fn unique_image() -> FeedImage {
    FeedImage::new(
        Uuid::new_v4(),
        Some("any description".into()),
        Some("any location".into()),
        any_url(),
    )
}

pub fn unique_image_feed() -> (Vec<FeedImage>, Vec<LocalFeedImage>) {
    let models = vec![unique_image(), unique_image()];
    let local = models.iter().map(LocalFeedImage::from).collect();
    (models, local)
}

// ---------------------------------------------------------------------------
// Loader / cache doubles
// ---------------------------------------------------------------------------

pub type ImageLoaderStub = LoaderStub<Url, Vec<u8>>;
pub type ImageCacheSpy = CacheSpy<Url, Vec<u8>>;

type Outcome<O> = Box<dyn Fn() -> Result<O> + Send + Sync>;

/// A [`Loader`] that records its inputs and always answers the same way.
pub struct LoaderStub<I, O> {
    inputs: Mutex<Vec<I>>,
    outcome: Outcome<O>,
}

impl<I, O> LoaderStub<I, O> {
    pub fn failing() -> Self {
        Self::failing_with(|| Error::Connectivity)
    }

    pub fn failing_with(error: impl Fn() -> Error + Send + Sync + 'static) -> Self {
        Self {
            inputs: Mutex::new(Vec::new()),
            outcome: Box::new(move || Err(error())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl<I, O> LoaderStub<I, O>
where
    O: Clone + Send + Sync + 'static,
{
    pub fn succeeding(output: O) -> Self {
        Self {
            inputs: Mutex::new(Vec::new()),
            outcome: Box::new(move || Ok(output.clone())),
        }
    }
}

impl<I: Clone, O> LoaderStub<I, O> {
    pub fn loaded_inputs(&self) -> Vec<I> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl<I, O> Loader for LoaderStub<I, O>
where
    I: Clone + Send + Sync + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn load(&self, input: &I) -> Result<O> {
        self.inputs.lock().unwrap().push(input.clone());
        (self.outcome)()
    }
}

/// A [`ResourceCache`] that records every save.
pub struct CacheSpy<I, R> {
    saved: Mutex<Vec<(I, R)>>,
    fails: bool,
}

impl<I, R> CacheSpy<I, R> {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fails: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fails: true,
        }
    }
}

impl<I: Clone, R: Clone> CacheSpy<I, R> {
    pub fn saved(&self) -> Vec<(I, R)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl<I, R> ResourceCache for CacheSpy<I, R>
where
    I: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    type Input = I;
    type Resource = R;

    async fn save(&self, input: &I, resource: &R) -> Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((input.clone(), resource.clone()));
        if self.fails {
            Err(Error::Store(anyhow!("insertion failed")))
        } else {
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum StoreMessage {
    Retrieve,
    Insert(Vec<LocalFeedImage>, DateTime<Utc>),
    Delete,
}

/// A [`FeedStore`] that records messages and answers with stubbed results.
/// Retrieval is empty until stubbed.
#[derive(Default)]
pub struct FeedStoreSpy {
    messages: Mutex<Vec<StoreMessage>>,
    retrieval: Mutex<Option<CachedFeed>>,
    retrieval_fails: AtomicBool,
    deletion_fails: AtomicBool,
    insertion_fails: AtomicBool,
}

impl FeedStoreSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<StoreMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn complete_retrieval_with(&self, cache: CachedFeed) {
        *self.retrieval.lock().unwrap() = Some(cache);
    }

    pub fn fail_retrieval(&self) {
        self.retrieval_fails.store(true, Ordering::SeqCst);
    }

    pub fn fail_deletion(&self) {
        self.deletion_fails.store(true, Ordering::SeqCst);
    }

    pub fn fail_insertion(&self) {
        self.insertion_fails.store(true, Ordering::SeqCst);
    }

    fn record(&self, message: StoreMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

#[async_trait]
impl FeedStore for FeedStoreSpy {
    async fn retrieve(&self) -> anyhow::Result<Option<CachedFeed>> {
        self.record(StoreMessage::Retrieve);
        if self.retrieval_fails.load(Ordering::SeqCst) {
            return Err(anyhow!("retrieval failed"));
        }
        Ok(self.retrieval.lock().unwrap().clone())
    }

    async fn insert(&self, feed: &[LocalFeedImage], timestamp: DateTime<Utc>) -> anyhow::Result<()> {
        self.record(StoreMessage::Insert(feed.to_vec(), timestamp));
        if self.insertion_fails.load(Ordering::SeqCst) {
            return Err(anyhow!("insertion failed"));
        }
        Ok(())
    }

    async fn delete_cached_feed(&self) -> anyhow::Result<()> {
        self.record(StoreMessage::Delete);
        if self.deletion_fails.load(Ordering::SeqCst) {
            return Err(anyhow!("deletion failed"));
        }
        Ok(())
    }
}

/// A [`FeedImageDataStore`] whose every operation fails.
pub struct FailingImageDataStore;

#[async_trait]
impl FeedImageDataStore for FailingImageDataStore {
    async fn retrieve(&self, _: &Url) -> anyhow::Result<Option<Vec<u8>>> {
        Err(anyhow!("retrieval failed"))
    }

    async fn insert(&self, _: &[u8], _: &Url) -> anyhow::Result<()> {
        Err(anyhow!("insertion failed"))
    }
}

// ---------------------------------------------------------------------------
// HTTP double
// ---------------------------------------------------------------------------

/// An [`HttpClient`] that records requested URLs and answers every GET the
/// same way.
pub struct HttpClientStub {
    requested: Mutex<Vec<Url>>,
    response: Option<(u16, Vec<u8>)>,
}

impl HttpClientStub {
    pub fn responding(status: u16, data: Vec<u8>) -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            response: Some((status, data)),
        }
    }

    pub fn failing() -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            response: None,
        }
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for HttpClientStub {
    async fn get(&self, url: &Url) -> anyhow::Result<(Vec<u8>, HttpResponse)> {
        self.requested.lock().unwrap().push(url.clone());
        match &self.response {
            Some((status, data)) => Ok((
                data.clone(),
                HttpResponse {
                    status: *status,
                    url: url.clone(),
                },
            )),
            None => Err(anyhow!("connection refused")),
        }
    }
}

// ---------------------------------------------------------------------------
// View double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMessage<VM> {
    Resource(VM),
    Loading(bool),
    Error(Option<String>),
}

/// Records everything displayed on it.  Clones share one log, so a single
/// spy can stand in for the resource, loading and error views at once.
pub struct ViewSpy<VM> {
    messages: Rc<RefCell<Vec<ViewMessage<VM>>>>,
}

impl<VM> Clone for ViewSpy<VM> {
    fn clone(&self) -> Self {
        Self {
            messages: Rc::clone(&self.messages),
        }
    }
}

impl<VM: Clone> ViewSpy<VM> {
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<ViewMessage<VM>> {
        self.messages.borrow().clone()
    }
}

impl<VM> ResourceView for ViewSpy<VM> {
    type ViewModel = VM;

    fn display(&mut self, view_model: VM) {
        self.messages.borrow_mut().push(ViewMessage::Resource(view_model));
    }
}

impl<VM> ResourceLoadingView for ViewSpy<VM> {
    fn display(&mut self, view_model: ResourceLoadingViewModel) {
        self.messages
            .borrow_mut()
            .push(ViewMessage::Loading(view_model.is_loading));
    }
}

impl<VM> ResourceErrorView for ViewSpy<VM> {
    fn display(&mut self, view_model: ResourceErrorViewModel) {
        self.messages
            .borrow_mut()
            .push(ViewMessage::Error(view_model.message));
    }
}

/// Records every [`FeedImageViewModel`] displayed on it.
pub struct FeedImageViewSpy<Image> {
    messages: Rc<RefCell<Vec<FeedImageViewModel<Image>>>>,
}

impl<Image> Clone for FeedImageViewSpy<Image> {
    fn clone(&self) -> Self {
        Self {
            messages: Rc::clone(&self.messages),
        }
    }
}

impl<Image: Clone> FeedImageViewSpy<Image> {
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<FeedImageViewModel<Image>> {
        self.messages.borrow().clone()
    }
}

impl<Image> FeedImageView for FeedImageViewSpy<Image> {
    type Image = Image;

    fn display(&mut self, view_model: FeedImageViewModel<Image>) {
        self.messages.borrow_mut().push(view_model);
    }
}
