use std::{
    path::Path,
    sync::LazyLock,
};

use poketeam_local_data::LocalDataStore;

static LOCAL_DATA_STORE: LazyLock<LocalDataStore> = LazyLock::new(|| {
    LocalDataStore::new_from_env("DATA_DIR")
        .or_else(|_| {
            LocalDataStore::new(
                Path::new(env!("CARGO_MANIFEST_DIR"))
                    .join("..")
                    .join("poketeam-local-data")
                    .join("data"),
            )
        })
        .unwrap()
});

/// The shared [`LocalDataStore`] for tests.
///
/// Reads from `DATA_DIR` if defined, and from the bundled dataset otherwise.
pub fn static_local_data_store() -> &'static LocalDataStore {
    &LOCAL_DATA_STORE
}
