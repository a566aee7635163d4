use async_trait::async_trait;
use log::warn;

use super::{Loader, ResourceCache};
use crate::error::Result;

/// Writes every successful load of `inner` through to `cache`.
///
/// The cache write does not affect the result: a failed save is logged and
/// the loaded resource is still returned.  Failures from `inner` pass through
/// untouched and never reach the cache.
pub struct CachingLoader<L, C> {
    inner: L,
    cache: C,
}

impl<L, C> CachingLoader<L, C> {
    pub fn new(inner: L, cache: C) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<L, C> Loader for CachingLoader<L, C>
where
    L: Loader,
    L::Output: Sync,
    C: ResourceCache<Input = L::Input, Resource = L::Output>,
{
    type Input = L::Input;
    type Output = L::Output;

    async fn load(&self, input: &Self::Input) -> Result<Self::Output> {
        let resource = self.inner.load(input).await?;
        if let Err(e) = self.cache.save(input, &resource).await {
            warn!("failed to write loaded resource to cache: {e}");
        }
        Ok(resource)
    }
}
