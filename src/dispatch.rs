//! Getting background load results back onto the UI thread.
//!
//! Loads complete on tokio workers.  Their completions only push a
//! [`UiMsg`] into an [`mpsc`] channel; the main loop drains it on every tick
//! and hands each result to the adapter that started the load.  Presenters
//! and views are therefore only ever touched from the UI thread.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use livescroll_feed::presentation::LoadTicket;
use livescroll_feed::{FeedImage, Result};

/// A finished load, waiting for the UI thread.
pub enum UiMsg {
    Feed(LoadTicket, Result<Vec<FeedImage>>),
    Image {
        row: usize,
        ticket: LoadTicket,
        result: Result<Vec<u8>>,
    },
}

/// Completion for a feed load.  A closed channel means the UI is gone and
/// the result is dropped.
pub fn feed_delivery(
    tx: &Sender<UiMsg>,
) -> impl FnOnce(LoadTicket, Result<Vec<FeedImage>>) + Send + 'static {
    let tx = tx.clone();
    move |ticket, result| {
        let _ = tx.send(UiMsg::Feed(ticket, result));
    }
}

/// Completion for the image load of the cell at `row`.
pub fn image_delivery(
    tx: &Sender<UiMsg>,
    row: usize,
) -> impl FnOnce(LoadTicket, Result<Vec<u8>>) + Send + 'static {
    let tx = tx.clone();
    move |ticket, result| {
        let _ = tx.send(UiMsg::Image {
            row,
            ticket,
            result,
        });
    }
}

/// Fires every `interval`; never fires without one.
pub struct RefreshTimer {
    interval: Option<Duration>,
    last: Instant,
}

impl RefreshTimer {
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// True once per elapsed interval.
    pub fn is_due(&mut self) -> bool {
        match self.interval {
            Some(interval) if self.last.elapsed() >= interval => {
                self.last = Instant::now();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}
