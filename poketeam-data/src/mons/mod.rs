mod gender;
mod nature;
mod species_data;
mod stat;
mod r#type;

pub use gender::Gender;
pub use nature::{
    Nature,
    NatureModifier,
};
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::Type;
