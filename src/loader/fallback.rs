use async_trait::async_trait;
use log::debug;

use super::Loader;
use crate::error::Result;

/// Tries `primary`; only when it fails is `fallback` asked, and its result
/// (success or failure) becomes the result.
pub struct FallbackLoader<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackLoader<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> Loader for FallbackLoader<P, F>
where
    P: Loader,
    F: Loader<Input = P::Input, Output = P::Output>,
{
    type Input = P::Input;
    type Output = P::Output;

    async fn load(&self, input: &Self::Input) -> Result<Self::Output> {
        match self.primary.load(input).await {
            Ok(resource) => Ok(resource),
            Err(e) => {
                debug!("primary loader failed ({e}), trying fallback");
                self.fallback.load(input).await
            }
        }
    }
}
