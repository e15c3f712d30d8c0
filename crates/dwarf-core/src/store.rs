use crate::code::Code;
use crate::error::Result;
use async_trait::async_trait;

/// Bidirectional URL <-> code storage.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Returns the code for `url`, allocating and persisting a new one if the
    /// url has never been saved. Saving the same url twice yields the same code.
    ///
    /// Callers are expected to have validated the url syntax already.
    async fn save(&self, url: &str) -> Result<Code>;

    /// Resolves a code to its url. Fails with `StoreError::NotFound` if the
    /// code was never issued.
    async fn load(&self, code: &str) -> Result<String>;
}
