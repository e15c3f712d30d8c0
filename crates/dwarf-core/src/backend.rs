use crate::error::BackendError;
use async_trait::async_trait;

/// Result type for key-value backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// The minimal key-value capability the mapping store needs.
///
/// Both index directions live in one flat string keyspace. Implementations
/// must be safe to share across concurrent tasks.
#[async_trait]
pub trait KvBackend: Send + Sync + 'static {
    /// Reads a value. Returns `Ok(None)` if the key is absent.
    async fn get(&self, key: &str) -> BackendResult<Option<String>>;

    /// Writes a value unconditionally, without expiry.
    async fn set(&self, key: &str, value: &str) -> BackendResult<()>;

    /// Removes a key. It is not an error if the key does not exist.
    async fn delete(&self, key: &str) -> BackendResult<()>;

    /// Checks whether a key is present.
    async fn exists(&self, key: &str) -> BackendResult<bool>;
}
