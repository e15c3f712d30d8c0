use crate::error::PolicyError;
use crate::keys::KeySpace;
use crate::policy::AllocationPolicy;
use async_trait::async_trait;
use dwarf_core::{Code, KvBackend, Result, StoreError, UrlStore};
use dwarf_generator::Generator;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

/// A [`UrlStore`] on top of a plain key-value backend.
///
/// Each saved url gets two entries: the forward entry (url -> code) that
/// makes re-saving idempotent, and the reverse entry (code -> url) that
/// `load` reads.
///
/// None of the backend calls of a save run inside a backend transaction.
/// Two concurrent first-time saves of the same url can both miss the forward
/// lookup and mint two codes; the last forward write wins and the other code
/// keeps a reverse entry that still resolves but is no longer referenced.
/// That costs one code slot and never breaks a reverse mapping.
pub struct MappingStore<B, G> {
    backend: Arc<B>,
    generator: Arc<G>,
    keys: KeySpace,
    policy: AllocationPolicy,
}

impl<B, G> Clone for MappingStore<B, G> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            generator: Arc::clone(&self.generator),
            keys: self.keys.clone(),
            policy: self.policy,
        }
    }
}

impl<B, G> std::fmt::Debug for MappingStore<B, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingStore")
            .field("keys", &self.keys)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<B: KvBackend, G: Generator> MappingStore<B, G> {
    /// Creates a store in the default key namespace.
    ///
    /// # Arguments
    ///
    /// * `backend` - Key-value store holding both index directions.
    /// * `generator` - Source of candidate codes.
    /// * `policy` - Code length bounds; rejected if the floor is zero or the
    ///   max length is below the floor.
    pub fn new(
        backend: B,
        generator: G,
        policy: AllocationPolicy,
    ) -> std::result::Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            backend: Arc::new(backend),
            generator: Arc::new(generator),
            keys: KeySpace::default(),
            policy,
        })
    }

    /// Replaces the key namespace.
    pub fn with_key_space(mut self, keys: KeySpace) -> Self {
        self.keys = keys;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key_space(&self) -> &KeySpace {
        &self.keys
    }

    /// Finds a candidate code not present in the reverse index.
    ///
    /// Starts at the char floor and adds one symbol per collision, up to the
    /// policy's max length.
    async fn discover(&self) -> Result<Code> {
        for length in self.policy.lengths() {
            let candidate = self.generator.generate(length);
            let taken = self
                .backend
                .exists(&self.keys.reverse(candidate.as_str()))
                .await?;

            if !taken {
                return Ok(candidate);
            }

            debug!(code = %candidate, length, "code collision, growing length");
        }

        warn!(
            max_length = self.policy.max_length,
            "no free code left within the allocation policy"
        );
        Err(StoreError::KeyspaceExhausted {
            max_length: self.policy.max_length,
        })
    }

    /// Writes both index entries, forward first.
    ///
    /// A failed reverse write deletes the forward entry again so no url ever
    /// points at a code that does not resolve. If that delete fails too, the
    /// dangling forward entry stays and the error says so.
    async fn persist(&self, url: &str, code: &Code) -> Result<()> {
        let forward = self.keys.forward(url);
        let reverse = self.keys.reverse(code.as_str());

        self.backend.set(&forward, code.as_str()).await?;

        if let Err(source) = self.backend.set(&reverse, url).await {
            warn!(url, code = %code, error = %source, "reverse write failed, rolling back forward entry");

            let rollback = match self.backend.delete(&forward).await {
                Ok(()) => None,
                Err(e) => {
                    error!(url, code = %code, error = %e, "rollback failed, forward entry left dangling");
                    Some(e)
                }
            };

            return Err(StoreError::PartialWrite { source, rollback });
        }

        Ok(())
    }
}

#[async_trait]
impl<B: KvBackend, G: Generator> UrlStore for MappingStore<B, G> {
    async fn save(&self, url: &str) -> Result<Code> {
        trace!(url, "looking up existing code");
        let existing = self.backend.get(&self.keys.forward(url)).await?;

        if let Some(code) = existing.filter(|code| !code.is_empty()) {
            debug!(url, code = %code, "url already has a code");
            return Ok(Code::new_unchecked(code));
        }

        let code = self.discover().await?;
        self.persist(url, &code).await?;

        info!(url, code = %code, "created new short code");
        Ok(code)
    }

    async fn load(&self, code: &str) -> Result<String> {
        match self.backend.get(&self.keys.reverse(code)).await? {
            Some(url) => {
                debug!(code, url = %url, "loaded url");
                Ok(url)
            }
            None => {
                warn!(code, "no url stored for code");
                Err(StoreError::NotFound(code.to_string()))
            }
        }
    }
}
