mod local;

pub use local::LocalDataStore;
