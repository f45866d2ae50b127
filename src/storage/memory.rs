use super::BlobStore;
use crate::error::StorageError;
use ahash::AHashMap;

/// In-process blob storage. Contents are lost when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: AHashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single blob.
    pub fn with_blob(key: &str, value: impl Into<String>) -> Self {
        let mut blobs = AHashMap::new();
        blobs.insert(key.to_string(), value.into());
        Self { blobs }
    }

    /// Direct read access, bypassing the `Result` of the trait method.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.blobs.remove(key);
        Ok(())
    }
}
