use async_trait::async_trait;
use dwarf_core::{BackendError, BackendResult, KvBackend};
use dwarf_storage::InMemoryBackend;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-memory backend whose operations can be made to fail on demand.
#[derive(Debug, Default)]
pub struct FaultyBackend {
    pub inner: InMemoryBackend,
    fail_get: AtomicBool,
    fail_delete: AtomicBool,
    /// `set` fails for keys starting with this prefix.
    fail_set_prefix: Mutex<Option<String>>,
}

impl FaultyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_get(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub fn fail_set_with_prefix(&self, prefix: impl Into<String>) {
        *self.fail_set_prefix.lock() = Some(prefix.into());
    }
}

#[async_trait]
impl KvBackend for FaultyBackend {
    async fn get(&self, key: &str) -> BackendResult<Option<String>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("connection refused".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        let failing = self
            .fail_set_prefix
            .lock()
            .as_deref()
            .is_some_and(|prefix| key.starts_with(prefix));
        if failing {
            return Err(BackendError::Operation("write refused".into()));
        }
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> BackendResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("connection reset".into()));
        }
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &str) -> BackendResult<bool> {
        self.inner.exists(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_fails_only_under_the_configured_prefix() {
        let backend = FaultyBackend::new();
        backend.fail_set_with_prefix("dwarf:url:");

        assert!(backend.set("dwarf:url:abc", "http://a.com").await.is_err());
        backend.set("dwarf:code:http://a.com", "abc").await.unwrap();

        // the prefix can be moved while the backend is shared
        backend.fail_set_with_prefix("dwarf:code:");
        backend.set("dwarf:url:abc", "http://a.com").await.unwrap();
        assert!(backend.set("dwarf:code:http://b.com", "abd").await.is_err());
    }
}
