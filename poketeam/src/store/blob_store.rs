use anyhow::Result;

/// Key-value storage for string blobs, such as browser local storage.
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under the key.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores the blob under the key, replacing any existing blob.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
