//! Persistence port for the CRM store.
//!
//! The store serializes whole collections and writes each one as a
//! single document under a fixed key; there are no partial updates and
//! no schema version field. Backends only need durable read/write of
//! opaque strings, which keeps the store swappable onto a real
//! database without touching call sites.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use anyhow::Result;
use async_trait::async_trait;

/// A key-value document backend. Implementations must be `Send + Sync`.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Reads the document stored under `key`, or `None` if absent.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `key`.
    async fn write(&self, key: &str, payload: &str) -> Result<()>;
}
