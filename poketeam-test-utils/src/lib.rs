mod blob_store;
mod data_store;
mod error_assert;
mod fixtures;
mod setup;

pub use blob_store::{
    FailingBlobStore,
    ReadFailingBlobStore,
};
pub use data_store::static_local_data_store;
pub use error_assert::assert_validation_problems;
pub use fixtures::{
    full_team,
    pokemon,
    sample_team,
};
pub use setup::setup_test_environment;
