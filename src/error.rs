//! Error type shared by every loader in the pipeline.
//!
//! Capabilities at the edges (HTTP client, stores) report failures as
//! [`anyhow::Error`]; loaders translate those into one of the variants below
//! so callers can match on the failure kind without knowing the transport.

use thiserror::Error;

/// A failure surfaced by a loader's `load`/`save` future.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed before a response arrived.
    #[error("connectivity error")]
    Connectivity,

    /// A response arrived but could not be used (bad status, malformed or
    /// empty body).
    #[error("invalid data")]
    InvalidData,

    /// The local store could not be read or written.
    #[error("store operation failed: {0}")]
    Store(#[source] anyhow::Error),

    /// The local image store holds no bytes for the requested URL.
    #[error("resource not found in local store")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
