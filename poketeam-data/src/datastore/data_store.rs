use anyhow::Result;

use crate::{
    MoveData,
    SpeciesData,
    SpeciesMoves,
};

/// Collection of the static species and move datasets.
///
/// This trait can be implemented for different data sources, such as files on disk or data
/// compiled into the binary. Data is read-only and shared.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, applying the given filter on the underlying data.
    ///
    /// IDs are returned in dataset order.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<u32>>;

    /// Gets every move record across all species, applying the given filter.
    ///
    /// Moves learned by many species appear once per species, in dataset order.
    fn all_moves(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<MoveData>>;

    /// Gets a species by ID.
    fn get_species(&self, id: u32) -> Result<Option<SpeciesData>>;

    /// Gets the learnable moves of a species by ID.
    fn get_species_moves(&self, id: u32) -> Result<Option<SpeciesMoves>>;
}

/// Searches for species matching the given term, in dataset order.
pub fn search_species(
    data: &dyn DataStore,
    term: &str,
    limit: usize,
) -> Result<Vec<SpeciesData>> {
    data.all_species_ids(&|species| species.matches(term))?
        .into_iter()
        .take(limit)
        .filter_map(|id| data.get_species(id).transpose())
        .collect()
}

/// Gets the moves a species can learn.
///
/// Formes and mega evolutions without their own entry fall back to the moves of their base
/// species. Unknown species have no moves.
pub fn learnable_moves(data: &dyn DataStore, id: u32) -> Result<Vec<MoveData>> {
    if let Some(moves) = data.get_species_moves(id)? {
        return Ok(moves.moves);
    }
    let base_id = match data.get_species(id)? {
        Some(species) => species.base_species_id(),
        None => return Ok(Vec::new()),
    };
    if base_id == id {
        return Ok(Vec::new());
    }
    Ok(data
        .get_species_moves(base_id)?
        .map(|moves| moves.moves)
        .unwrap_or_default())
}

/// Searches the learnable moves of a species, skipping moves that are already selected.
pub fn search_learnable_moves(
    data: &dyn DataStore,
    id: u32,
    term: &str,
    selected: &[String],
    limit: usize,
) -> Result<Vec<MoveData>> {
    Ok(learnable_moves(data, id)?
        .into_iter()
        .filter(|move_data| !selected.contains(&move_data.name_ja))
        .filter(|move_data| move_data.matches(term))
        .take(limit)
        .collect())
}
