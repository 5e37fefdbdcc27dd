use std::{
    env,
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use poketeam_data::{
    DataStore,
    MoveData,
    SpeciesData,
    SpeciesMoves,
};
use serde::de::DeserializeOwned;

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Both datasets are read eagerly on construction and kept in dataset order.
#[derive(Debug)]
pub struct LocalDataStore {
    root: PathBuf,
    species: Vec<SpeciesData>,
    species_by_id: HashMap<u32, usize>,
    species_moves: Vec<SpeciesMoves>,
    species_moves_by_id: HashMap<u32, usize>,
}

impl LocalDataStore {
    /// Species dataset file name.
    pub const SPECIES_FILE: &str = "all-pokemon.json";
    /// Move dataset file name.
    pub const MOVES_FILE: &str = "pokemon-moves.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or either dataset cannot
    /// be read.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }
        let species = read_json_file::<Vec<SpeciesData>>(&root.join(Self::SPECIES_FILE))
            .context("failed to read species")?;
        let species_moves = read_json_file::<Vec<SpeciesMoves>>(&root.join(Self::MOVES_FILE))
            .context("failed to read moves")?;
        let mut store = Self::from_data(species, species_moves);
        store.root = root;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] over data that is already in memory.
    ///
    /// Records with a duplicate ID are ignored in favor of the first one.
    pub fn from_data(species: Vec<SpeciesData>, species_moves: Vec<SpeciesMoves>) -> Self {
        let mut species_by_id = HashMap::default();
        for (i, data) in species.iter().enumerate() {
            species_by_id.entry(data.id).or_insert(i);
        }
        let mut species_moves_by_id = HashMap::default();
        for (i, data) in species_moves.iter().enumerate() {
            species_moves_by_id.entry(data.pokemon_id).or_insert(i);
        }
        Self {
            root: PathBuf::new(),
            species,
            species_by_id,
            species_moves,
            species_moves_by_id,
        }
    }

    /// The root directory the data was read from.
    ///
    /// Empty for in-memory data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of species records.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let path_name = path.to_string_lossy().to_string();
    let file = File::open(path).context(format!("{path_name} could not be opened"))?;
    serde_json::from_reader(BufReader::new(file)).context(format!("failed to parse {path_name}"))
}

impl DataStore for LocalDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<u32>> {
        Ok(self
            .species
            .iter()
            .filter(|species| filter(species))
            .map(|species| species.id)
            .collect())
    }

    fn all_moves(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<MoveData>> {
        Ok(self
            .species_moves
            .iter()
            .flat_map(|species_moves| species_moves.moves.iter())
            .filter(|move_data| filter(move_data))
            .cloned()
            .collect())
    }

    fn get_species(&self, id: u32) -> Result<Option<SpeciesData>> {
        Ok(self
            .species_by_id
            .get(&id)
            .map(|i| self.species[*i].clone()))
    }

    fn get_species_moves(&self, id: u32) -> Result<Option<SpeciesMoves>> {
        Ok(self
            .species_moves_by_id
            .get(&id)
            .map(|i| self.species_moves[*i].clone()))
    }
}
