mod move_category;
mod move_data;
mod move_index;

pub use move_category::MoveCategory;
pub use move_data::{
    MoveData,
    SpeciesMoves,
};
pub use move_index::MoveIndex;
