//! Core types and traits for the dwarf URL shortener.
//!
//! This crate provides the types shared by the code generator, the
//! key-value backends, the mapping store, and the HTTP gateway.

pub mod backend;
pub mod code;
pub mod error;
pub mod store;

pub use backend::{BackendResult, KvBackend};
pub use code::{Code, ALPHABET};
pub use error::{BackendError, InvalidCode, Result, StoreError};
pub use store::UrlStore;
