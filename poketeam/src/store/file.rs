use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use anyhow::{
    Context,
    Error,
    Result,
};

use crate::store::BlobStore;

/// [`BlobStore`] implementation that stores each blob as a file in a directory.
///
/// The blob for `key` lives at `<root>/<key>.json`.
#[derive(Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Creates a new store over an existing directory.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for FileBlobStore ({}) does not exist",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Creates a new store over the directory named by an environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        let root = std::env::var(env_var).context(format!("{env_var} not defined"))?;
        Self::new(root)
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(Error::msg(format!("invalid blob key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(Error::new(err).context(format!("failed to read {}", path.display())))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))
    }
}
