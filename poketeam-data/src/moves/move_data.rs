use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    Type,
};

/// Data about a particular move, as stored in the move dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    /// Unique ID of the move.
    pub id: u32,
    /// Internal name, in lowercase English.
    pub name: String,
    /// Japanese display name.
    ///
    /// Team data refers to moves by this name.
    pub name_ja: String,
    /// Move type.
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Move category.
    pub category: MoveCategory,
    /// Base power, if the move deals damage directly.
    pub power: Option<u32>,
    /// Accuracy as a percentage, if the move can miss.
    pub accuracy: Option<u32>,
    /// Power points.
    pub pp: u32,
}

impl MoveData {
    /// Checks if the move matches a search term.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.name_ja.contains(term)
            || self.name.to_lowercase().contains(&term.to_lowercase())
            || self.primary_type.to_string().contains(term)
    }
}

/// All moves a single species can learn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesMoves {
    /// Species ID.
    pub pokemon_id: u32,
    /// Species name.
    pub pokemon_name: String,
    /// Learnable moves.
    #[serde(default)]
    pub moves: Vec<MoveData>,
}
