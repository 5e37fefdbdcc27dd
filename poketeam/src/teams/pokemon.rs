use anyhow::Result;
use poketeam_calc::calculate_stats;
use poketeam_data::{
    DataStore,
    Gender,
    Nature,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::common::display_width;

/// Level given to newly added Pokémon.
pub const DEFAULT_LEVEL: i32 = 50;
/// Maximum display width of a nickname.
///
/// Full-width characters count twice, so this allows six Japanese characters.
pub const MAX_NICKNAME_WIDTH: usize = 12;

/// A single slot on a team.
///
/// Field names and order follow the JSON carried by share tokens. Optional fields are omitted when
/// absent so that a decoded token encodes back to the same team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: String,
    pub species_id: u32,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub ability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<StatTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<StatTable>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shiny: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<Nature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatTable>,
}

impl Pokemon {
    /// Creates a new Pokémon at [`DEFAULT_LEVEL`] with a fresh id.
    pub fn new<S, A>(species_id: u32, species: S, ability: A, moves: Vec<String>) -> Self
    where
        S: Into<String>,
        A: Into<String>,
    {
        Self {
            id: Uuid::new_v4().to_string(),
            species_id,
            species: species.into(),
            nickname: None,
            level: DEFAULT_LEVEL,
            gender: None,
            ability: ability.into(),
            item: None,
            evs: None,
            ivs: None,
            moves,
            shiny: None,
            nature: None,
            stats: None,
        }
    }

    /// The name shown for the Pokémon: its nickname if it has a non-empty one, otherwise its
    /// species name.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nickname) if !nickname.is_empty() => nickname,
            _ => &self.species,
        }
    }

    /// Sets the nickname.
    ///
    /// An empty nickname clears it.
    pub fn set_nickname<S>(&mut self, nickname: S)
    where
        S: Into<String>,
    {
        let nickname = nickname.into();
        self.nickname = (!nickname.is_empty()).then_some(nickname);
    }

    /// Display width of the nickname, or 0 if there is none.
    pub fn nickname_width(&self) -> usize {
        self.nickname.as_deref().map(display_width).unwrap_or(0)
    }

    /// Recomputes the cached stats from the species' base stats.
    ///
    /// A species missing from the data store clears the cache instead of failing, since teams may
    /// reference species the dataset does not have.
    pub fn refresh_stats(&mut self, data: &dyn DataStore) -> Result<()> {
        if data.get_species(self.species_id)?.is_none() {
            log::warn!(
                "species {} ({}) not found, clearing stats",
                self.species_id,
                self.species
            );
            self.stats = None;
            return Ok(());
        }
        self.stats = Some(calculate_stats(
            data,
            self.species_id,
            self.level,
            self.nature.unwrap_or_default(),
            self.ivs.as_ref(),
            self.evs.as_ref(),
        )?);
        Ok(())
    }
}
