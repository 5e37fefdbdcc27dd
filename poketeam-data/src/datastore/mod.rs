mod data_store;

pub use data_store::{
    DataStore,
    learnable_moves,
    search_learnable_moves,
    search_species,
};
