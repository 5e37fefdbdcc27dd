use ahash::HashMap;
use anyhow::Result;

use crate::{
    DataStore,
    MoveData,
    Type,
};

/// Index from a move's display name to its data.
///
/// Built once from the move dataset and passed by reference to anything that needs to resolve
/// move names, such as type badges next to each move on a team.
#[derive(Debug, Default, Clone)]
pub struct MoveIndex {
    moves: HashMap<String, MoveData>,
}

impl MoveIndex {
    /// Builds the index from every move in the data store.
    pub fn new(data: &dyn DataStore) -> Result<Self> {
        Ok(Self::from_moves(data.all_moves(&|_| true)?))
    }

    /// Builds the index from the given moves.
    ///
    /// The same move appears once per species that learns it, so the first record for each name
    /// wins.
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = MoveData>,
    {
        let mut index = HashMap::default();
        for move_data in moves {
            index.entry(move_data.name_ja.clone()).or_insert(move_data);
        }
        Self { moves: index }
    }

    /// Number of distinct moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Looks up a move by display name.
    pub fn get(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(name)
    }

    /// Looks up the type of a move by display name.
    pub fn move_type(&self, name: &str) -> Option<Type> {
        self.get(name).map(|move_data| move_data.primary_type)
    }

    /// Looks up the types of many moves, preserving order.
    pub fn move_types<'a, I>(&self, names: I) -> Vec<Option<Type>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.move_type(name)).collect()
    }
}
