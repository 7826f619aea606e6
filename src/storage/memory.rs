use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::StorageBackend;

/// In-memory backend for tests. Documents live in a map behind a
/// `std::sync::RwLock`; futures resolve immediately.
#[derive(Default)]
pub struct MemoryBackend {
    docs: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.docs.read().expect("storage lock poisoned").get(key).cloned())
    }

    async fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.docs
            .write()
            .expect("storage lock poisoned")
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
