use std::sync::atomic::{
    AtomicBool,
    Ordering,
};

use anyhow::{
    Error,
    Result,
};
use poketeam::store::{
    BlobStore,
    MemoryBlobStore,
};

/// [`BlobStore`] that fails every operation, like storage that is full or disabled.
#[derive(Default)]
pub struct FailingBlobStore;

impl BlobStore for FailingBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(Error::msg(format!("cannot read {key}")))
    }

    fn set(&self, key: &str, _: &str) -> Result<()> {
        Err(Error::msg(format!("cannot write {key}")))
    }
}

/// In-memory [`BlobStore`] whose reads can be switched off while writes keep working.
pub struct ReadFailingBlobStore {
    blobs: MemoryBlobStore,
    readable: AtomicBool,
}

impl ReadFailingBlobStore {
    /// Creates a new, empty store that is readable.
    pub fn new() -> Self {
        Self {
            blobs: MemoryBlobStore::new(),
            readable: AtomicBool::new(true),
        }
    }

    /// Turns reads on or off.
    pub fn set_readable(&self, readable: bool) {
        self.readable.store(readable, Ordering::SeqCst);
    }
}

impl Default for ReadFailingBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for ReadFailingBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.readable.load(Ordering::SeqCst) {
            return Err(Error::msg(format!("cannot read {key}")));
        }
        self.blobs.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.blobs.set(key, value)
    }
}
