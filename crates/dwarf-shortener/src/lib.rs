//! Code allocation and bidirectional URL mapping.
//!
//! [`MappingStore`] turns any [`KvBackend`](dwarf_core::KvBackend) into a
//! [`UrlStore`](dwarf_core::UrlStore): it hands out a fresh collision-free
//! code per url and keeps a forward (url -> code) and a reverse
//! (code -> url) index side by side in the backend.

pub mod error;
pub mod keys;
pub mod mapping;
pub mod policy;

pub use error::PolicyError;
pub use keys::KeySpace;
pub use mapping::MappingStore;
pub use policy::AllocationPolicy;

#[cfg(test)]
mod testing;
