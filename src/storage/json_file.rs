use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::StorageBackend;

/// File-per-key backend: each collection lives in `<dir>/<key>.json`
/// and is rewritten whole on every mutation.
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn write(&self, key: &str, payload: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create data dir {}", self.dir.display()))?;

        let path = self.path_for(key);
        tokio::fs::write(&path, payload)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path());
        assert!(backend.read("companies").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("nested"));

        backend.write("leads", "[1,2,3]").await.unwrap();
        assert_eq!(backend.read("leads").await.unwrap().unwrap(), "[1,2,3]");

        backend.write("leads", "[]").await.unwrap();
        assert_eq!(backend.read("leads").await.unwrap().unwrap(), "[]");
    }
}
