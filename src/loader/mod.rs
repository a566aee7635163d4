//! Generic asynchronous loading.
//!
//! A [`Loader`] turns an input into a resource.  Everything else in this
//! module wraps a `Loader` and is itself a `Loader`, so behaviour is added by
//! nesting rather than by writing new loader types:
//!
//! ```ignore
//! // remote first, write through to the cache, fall back to the cache
//! let feed = FallbackLoader::new(
//!     CachingLoader::new(remote, local.clone()),
//!     local,
//! );
//! ```
//!
//! [`LoadTask`] runs any such chain in the background and hands the result
//! to a single-shot completion.

mod caching;
mod fallback;
mod task;

pub use caching::CachingLoader;
pub use fallback::FallbackLoader;
pub use task::LoadTask;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// An asynchronous source of `Output` values keyed by `Input`.
///
/// Implementations must tolerate concurrent calls: several loads may be in
/// flight on the same loader at once.
#[async_trait]
pub trait Loader: Send + Sync {
    type Input: Send + Sync + 'static;
    type Output: Send + 'static;

    async fn load(&self, input: &Self::Input) -> Result<Self::Output>;
}

/// Somewhere a successfully loaded resource can be written back to.
#[async_trait]
pub trait ResourceCache: Send + Sync {
    type Input: Send + Sync + 'static;
    type Resource: Send + Sync + 'static;

    async fn save(&self, input: &Self::Input, resource: &Self::Resource) -> Result<()>;
}

#[async_trait]
impl<L> Loader for Arc<L>
where
    L: Loader + ?Sized,
{
    type Input = L::Input;
    type Output = L::Output;

    async fn load(&self, input: &Self::Input) -> Result<Self::Output> {
        (**self).load(input).await
    }
}

#[async_trait]
impl<'a, L> Loader for &'a L
where
    L: Loader + ?Sized,
{
    type Input = L::Input;
    type Output = L::Output;

    async fn load(&self, input: &Self::Input) -> Result<Self::Output> {
        (**self).load(input).await
    }
}

#[async_trait]
impl<C> ResourceCache for Arc<C>
where
    C: ResourceCache + ?Sized,
{
    type Input = C::Input;
    type Resource = C::Resource;

    async fn save(&self, input: &Self::Input, resource: &Self::Resource) -> Result<()> {
        (**self).save(input, resource).await
    }
}

#[async_trait]
impl<'a, C> ResourceCache for &'a C
where
    C: ResourceCache + ?Sized,
{
    type Input = C::Input;
    type Resource = C::Resource;

    async fn save(&self, input: &Self::Input, resource: &Self::Resource) -> Result<()> {
        (**self).save(input, resource).await
    }
}
