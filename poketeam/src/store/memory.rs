use std::sync::Mutex;

use ahash::HashMap;
use anyhow::{
    Error,
    Result,
};

use crate::store::BlobStore;

/// [`BlobStore`] implementation that keeps all blobs in memory.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| Error::msg("memory blob store is poisoned"))?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| Error::msg("memory blob store is poisoned"))?;
        blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod memory_test {
    use assert_matches::assert_matches;

    use crate::store::{
        BlobStore,
        MemoryBlobStore,
    };

    #[test]
    fn stores_and_replaces_blobs() {
        let store = MemoryBlobStore::new();
        assert_matches!(store.get("a"), Ok(None));
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        store.set("b", "3").unwrap();
        assert_matches!(store.get("a"), Ok(Some(value)) => {
            assert_eq!(value, "2");
        });
        assert_matches!(store.get("b"), Ok(Some(value)) => {
            assert_eq!(value, "3");
        });
    }
}
