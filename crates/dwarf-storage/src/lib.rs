//! Key-value backends for the mapping store.

pub mod memory;
pub mod redis;

pub use dwarf_core::{BackendError, BackendResult, KvBackend};
pub use memory::InMemoryBackend;
pub use self::redis::RedisBackend;
