use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;

use super::{Presented, ResourcePresenter};
use crate::error::Result;
use crate::loader::{LoadTask, Loader};

/// Identifies one load started by an adapter.  Unique process-wide, so a
/// completion can never be mistaken for a later load's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where the current load stands.  `Content` and `Error` are terminal for
/// that load; only a new `load_resource` leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading(LoadTicket),
    Content,
    Error,
}

/// Connects a UI request to a [`Loader`] and its [`ResourcePresenter`].
///
/// The load runs on the tokio runtime.  Its result is handed to the
/// `deliver` closure together with a [`LoadTicket`]; the caller brings it
/// back to the UI context and passes both to
/// [`did_finish`](Self::did_finish).  That split keeps every presenter and
/// view call on the caller's thread.
///
/// Starting a load cancels the previous one.  Dropping the adapter cancels
/// whatever is still in flight.
pub struct LoadResourcePresentationAdapter<L: ?Sized, P> {
    loader: Arc<L>,
    presenter: P,
    state: LoadState,
    task: Option<LoadTask>,
}

impl<L, P> LoadResourcePresentationAdapter<L, P>
where
    L: Loader + ?Sized + 'static,
    P: ResourcePresenter<L::Output>,
{
    pub fn new(loader: Arc<L>, presenter: P) -> Self {
        Self {
            loader,
            presenter,
            state: LoadState::Idle,
            task: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading(_))
    }

    /// Start a fresh load for `input`.  Must be called inside a tokio
    /// runtime context.
    pub fn load_resource<D>(&mut self, input: L::Input, deliver: D) -> LoadTicket
    where
        D: FnOnce(LoadTicket, Result<L::Output>) + Send + 'static,
    {
        self.cancel();

        let ticket = LoadTicket::next();
        self.state = LoadState::Loading(ticket);
        self.presenter.did_start_loading();

        let loader = Arc::clone(&self.loader);
        self.task = Some(LoadTask::spawn(
            async move { loader.load(&input).await },
            move |result| deliver(ticket, result),
        ));
        ticket
    }

    /// Present the result of the load identified by `ticket`.
    ///
    /// Returns `false`, without touching the presenter, when `ticket` is not
    /// the load currently in flight.
    pub fn did_finish(&mut self, ticket: LoadTicket, result: Result<L::Output>) -> bool {
        if self.state != LoadState::Loading(ticket) {
            debug!("ignoring completion of {ticket:?} in state {:?}", self.state);
            return false;
        }
        self.task = None;
        self.state = match result {
            Ok(resource) => match self.presenter.did_finish_loading_with(resource) {
                Presented::Content => LoadState::Content,
                Presented::Error => LoadState::Error,
            },
            Err(e) => {
                self.presenter.did_finish_loading_with_error(&e);
                LoadState::Error
            }
        };
        true
    }

    /// Cancel the load in flight, if any.  Its completion will not be
    /// delivered.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        if self.is_loading() {
            self.state = LoadState::Idle;
        }
    }
}

impl<L: ?Sized, P> Drop for LoadResourcePresentationAdapter<L, P> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::error::Error;
    use crate::test_support::{any_data, any_url, ImageLoaderStub};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Start,
        Success(Vec<u8>),
        Failure,
    }

    #[derive(Clone, Default)]
    struct PresenterSpy {
        events: Rc<RefCell<Vec<Event>>>,
        outcome: Option<Presented>,
    }

    impl PresenterSpy {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    impl ResourcePresenter<Vec<u8>> for PresenterSpy {
        fn did_start_loading(&mut self) {
            self.events.borrow_mut().push(Event::Start);
        }

        fn did_finish_loading_with(&mut self, resource: Vec<u8>) -> Presented {
            self.events.borrow_mut().push(Event::Success(resource));
            self.outcome.unwrap_or(Presented::Content)
        }

        fn did_finish_loading_with_error(&mut self, _: &Error) {
            self.events.borrow_mut().push(Event::Failure);
        }
    }

    type Delivery = (LoadTicket, Result<Vec<u8>>);
    type Sut = LoadResourcePresentationAdapter<ImageLoaderStub, PresenterSpy>;

    fn make_sut(loader: ImageLoaderStub) -> (Sut, PresenterSpy) {
        let presenter = PresenterSpy::default();
        let sut = LoadResourcePresentationAdapter::new(Arc::new(loader), presenter.clone());
        (sut, presenter)
    }

    fn channel() -> (
        impl Fn() -> Box<dyn FnOnce(LoadTicket, Result<Vec<u8>>) + Send>,
        UnboundedReceiver<Delivery>,
    ) {
        let (tx, rx): (UnboundedSender<Delivery>, _) = unbounded_channel();
        let deliver = move || {
            let tx = tx.clone();
            Box::new(move |ticket: LoadTicket, result: Result<Vec<u8>>| {
                let _ = tx.send((ticket, result));
            }) as Box<dyn FnOnce(LoadTicket, Result<Vec<u8>>) + Send>
        };
        (deliver, rx)
    }

    #[tokio::test]
    async fn start_then_success_reaches_content() {
        let (mut sut, presenter) = make_sut(ImageLoaderStub::succeeding(any_data()));
        let (deliver, mut rx) = channel();

        let ticket = sut.load_resource(any_url(), deliver());
        assert_eq!(sut.state(), LoadState::Loading(ticket));
        assert_eq!(presenter.events(), vec![Event::Start]);

        let (received, result) = rx.recv().await.unwrap();
        assert!(sut.did_finish(received, result));

        assert_eq!(sut.state(), LoadState::Content);
        assert_eq!(presenter.events(), vec![Event::Start, Event::Success(any_data())]);
    }

    #[tokio::test]
    async fn start_then_failure_reaches_error() {
        let (mut sut, presenter) = make_sut(ImageLoaderStub::failing());
        let (deliver, mut rx) = channel();

        sut.load_resource(any_url(), deliver());
        let (ticket, result) = rx.recv().await.unwrap();
        sut.did_finish(ticket, result);

        assert_eq!(sut.state(), LoadState::Error);
        assert_eq!(presenter.events(), vec![Event::Start, Event::Failure]);
    }

    #[tokio::test]
    async fn mapping_failure_reaches_error() {
        let presenter = PresenterSpy {
            outcome: Some(Presented::Error),
            ..PresenterSpy::default()
        };
        let loader = Arc::new(ImageLoaderStub::succeeding(any_data()));
        let mut sut = LoadResourcePresentationAdapter::new(loader, presenter);
        let (deliver, mut rx) = channel();

        sut.load_resource(any_url(), deliver());
        let (ticket, result) = rx.recv().await.unwrap();
        sut.did_finish(ticket, result);

        assert_eq!(sut.state(), LoadState::Error);
    }

    #[tokio::test]
    async fn no_transition_after_terminal_state() {
        let (mut sut, presenter) = make_sut(ImageLoaderStub::succeeding(any_data()));
        let (deliver, mut rx) = channel();

        let ticket = sut.load_resource(any_url(), deliver());
        let (_, result) = rx.recv().await.unwrap();
        sut.did_finish(ticket, result);

        assert!(!sut.did_finish(ticket, Err(Error::Connectivity)));
        assert_eq!(sut.state(), LoadState::Content);
        assert_eq!(presenter.events(), vec![Event::Start, Event::Success(any_data())]);
    }

    #[tokio::test]
    async fn new_load_starts_fresh_and_ignores_stale_ticket() {
        let (mut sut, presenter) = make_sut(ImageLoaderStub::succeeding(any_data()));
        let (deliver, mut rx) = channel();

        let first = sut.load_resource(any_url(), deliver());
        let second = sut.load_resource(any_url(), deliver());
        assert_ne!(first, second);

        assert!(!sut.did_finish(first, Ok(b"stale".to_vec())));
        let (received, result) = rx.recv().await.unwrap();
        assert_eq!(received, second, "only the latest load delivers");
        assert!(sut.did_finish(received, result));

        assert_eq!(
            presenter.events(),
            vec![Event::Start, Event::Start, Event::Success(any_data())]
        );
    }

    #[tokio::test]
    async fn cancel_prevents_delivery() {
        let (mut sut, _presenter) = make_sut(ImageLoaderStub::succeeding(any_data()));
        let (deliver, mut rx) = channel();

        sut.load_resource(any_url(), deliver());
        sut.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(sut.state(), LoadState::Idle);
    }

    #[tokio::test]
    async fn drop_cancels_in_flight_load() {
        let (mut sut, _presenter) = make_sut(ImageLoaderStub::succeeding(any_data()));
        let (deliver, mut rx) = channel();

        sut.load_resource(any_url(), deliver());
        drop(sut);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(rx.try_recv().is_err());
    }
}
