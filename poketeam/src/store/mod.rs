mod blob_store;
mod file;
mod memory;
mod team_store;

pub use blob_store::BlobStore;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use team_store::{
    SaveOutcome,
    TeamStore,
};
