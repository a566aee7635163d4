use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

/// Handle to a load running in the background.
///
/// The completion passed to [`LoadTask::spawn`] is called exactly once when
/// the load finishes, unless [`cancel`](LoadTask::cancel) was called first.
/// Completions run on a runtime worker, not on the caller's thread; anything
/// view-facing has to be re-dispatched by the completion itself.
///
/// Dropping the handle detaches the task; it does not cancel it.
#[derive(Debug)]
pub struct LoadTask {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl LoadTask {
    /// Spawn `load` onto the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn<F, T, C>(load: F, completion: C) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        C: FnOnce(T) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = tokio::spawn(async move {
            let result = load.await;
            if !flag.load(Ordering::Acquire) {
                completion(result);
            }
        });
        Self { cancelled, handle }
    }

    /// Suppress the completion and abort the load.
    ///
    /// Aborting drops the load future, and with it every wrapped loader
    /// future still pending inside it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
