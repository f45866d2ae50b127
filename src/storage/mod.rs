//! String-keyed blob storage the node store persists into.
//!
//! The node store never talks to a filesystem or browser storage directly; it
//! writes one serialized blob per key through a [`BlobStore`]. Two backends
//! ship with the crate: [`MemoryBlobStore`] for tests and embedding, and
//! [`FileBlobStore`] for the command-line tools.

use crate::error::StorageError;

mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// A flat key-value store of string blobs.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` if nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the blob under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the blob under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<B: BlobStore + ?Sized> BlobStore for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
