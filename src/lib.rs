//! livescroll-feed: the loading, caching and presentation core of a feed
//! client.
//!
//! ## Architecture overview
//!
//! ```text
//!                 ┌────────────┐            ┌──────────────┐
//!  UI event ────► │presentation│ ─ load ──► │   loader     │  FallbackLoader / CachingLoader
//!                 │  adapter   │ ◄─ result ─│  (LoadTask)  │
//!                 └─────┬──────┘            └──────┬───────┘
//!                       │ view models              │
//!                       ▼                  ┌───────┴────────┐
//!                 ResourceView traits      │ api     cache  │  RemoteFeedLoader, LocalFeedLoader, ...
//!                                          └───┬────────┬───┘
//!                                        HttpClient   FeedStore / FeedImageDataStore
//! ```
//!
//! * **`feed`**: the [`FeedImage`] domain value and loader capability aliases.
//! * **`loader`**: the generic [`Loader`] trait, its decorators, and
//!   [`LoadTask`] for running loads in the background.
//! * **`api`**: HTTP-backed loaders and the wire format.
//! * **`cache`**: cache policy, local loaders and store implementations.
//! * **`presentation`**: presenters, view models, view traits and the
//!   adapter that drives a load through them.
//! * **`error`**: the [`Error`] every loader reports.

pub mod api;
pub mod cache;
pub mod error;
pub mod feed;
pub mod loader;
pub mod presentation;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use feed::{FeedImage, FeedItem};
pub use loader::{CachingLoader, FallbackLoader, LoadTask, Loader, ResourceCache};
