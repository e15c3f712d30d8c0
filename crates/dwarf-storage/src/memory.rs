use async_trait::async_trait;
use dashmap::DashMap;
use dwarf_core::{BackendResult, KvBackend};
use std::sync::Arc;

/// In-memory implementation of [`KvBackend`] using DashMap.
///
/// DashMap shards its locks, so concurrent reads and writes to different
/// keys don't block each other. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    storage: Arc<DashMap<String, String>>,
}

impl InMemoryBackend {
    /// Creates a new, empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns every stored key starting with `prefix`.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.storage
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect()
    }
}

#[async_trait]
impl KvBackend for InMemoryBackend {
    async fn get(&self, key: &str) -> BackendResult<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> BackendResult<()> {
        self.storage.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> BackendResult<bool> {
        Ok(self.storage.contains_key(key))
    }
}
