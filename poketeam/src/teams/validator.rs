use ahash::HashSet;
use poketeam_calc::{
    ValidationReport,
    validate_evs,
    validate_ivs,
};
use poketeam_data::DataStore;

use crate::{
    error::TeamValidationError,
    teams::{
        MAX_NICKNAME_WIDTH,
        MAX_TEAM_NAME_LENGTH,
        MAX_TEAM_SIZE,
        Pokemon,
        Team,
    },
};

const MIN_LEVEL: i32 = 1;
const MAX_LEVEL: i32 = 100;
const MIN_MOVES: usize = 1;
const MAX_MOVES: usize = 4;

/// Validates teams before they are saved or shared.
///
/// Every problem is collected rather than stopping at the first one. Unknown species are tolerated,
/// since shared teams may come from a newer dataset.
#[derive(Default)]
pub struct TeamValidator<'d> {
    data: Option<&'d dyn DataStore>,
    require_members: bool,
}

impl<'d> TeamValidator<'d> {
    /// Creates a new validator with no data store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a data store, used to warn about species it does not know.
    pub fn with_data_store(mut self, data: &'d dyn DataStore) -> Self {
        self.data = Some(data);
        self
    }

    /// Requires at least one Pokémon on the team.
    pub fn require_members(mut self, require_members: bool) -> Self {
        self.require_members = require_members;
        self
    }

    /// Validates a team.
    pub fn validate_team(&self, team: &Team) -> Result<(), TeamValidationError> {
        let mut report = ValidationReport::default();

        if team.pokemon.len() > MAX_TEAM_SIZE {
            report.add_error(format!(
                "パーティは最大{MAX_TEAM_SIZE}体までです（現在: {}体）",
                team.pokemon.len()
            ));
        }
        if self.require_members && team.pokemon.is_empty() {
            report.add_error("パーティにポケモンを追加してください");
        }

        let name_length = team.name.chars().count();
        if name_length > MAX_TEAM_NAME_LENGTH {
            report.add_error(format!(
                "パーティ名は{MAX_TEAM_NAME_LENGTH}文字以内で入力してください（現在: {name_length}文字）"
            ));
        }

        let mut ids = HashSet::default();
        for pokemon in &team.pokemon {
            if !ids.insert(pokemon.id.as_str()) {
                report.add_error(format!("ポケモンのIDが重複しています: {}", pokemon.id));
            }
            report.merge(self.validate_pokemon(pokemon));
        }

        report
            .into_result()
            .map_err(|failure| TeamValidationError::new(failure.errors()))
    }

    /// Validates a single Pokémon.
    ///
    /// Every problem is prefixed with the Pokémon's display name.
    pub fn validate_pokemon(&self, pokemon: &Pokemon) -> ValidationReport {
        let mut report = ValidationReport::default();
        let name = pokemon.display_name();

        if let Some(data) = self.data {
            match data.get_species(pokemon.species_id) {
                Ok(Some(_)) => (),
                Ok(None) => log::warn!(
                    "{name} references unknown species {}",
                    pokemon.species_id
                ),
                Err(err) => log::warn!(
                    "failed to look up species {} for {name}: {err:#}",
                    pokemon.species_id
                ),
            }
        }

        let moves = pokemon.moves.len();
        if moves < MIN_MOVES {
            report.add_error(format!("{name}: 技を最低{MIN_MOVES}つ選択してください"));
        } else if moves > MAX_MOVES {
            report.add_error(format!(
                "{name}: 技は最大{MAX_MOVES}つまでです（現在: {moves}つ）"
            ));
        }

        if !(MIN_LEVEL..=MAX_LEVEL).contains(&pokemon.level) {
            report.add_error(format!(
                "{name}: レベルは{MIN_LEVEL}-{MAX_LEVEL}の範囲で指定してください（現在: {}）",
                pokemon.level
            ));
        }

        let width = pokemon.nickname_width();
        if width > MAX_NICKNAME_WIDTH {
            report.add_error(format!(
                "{name}: ニックネームは全角{}文字（半角{MAX_NICKNAME_WIDTH}文字）以内で入力してください",
                MAX_NICKNAME_WIDTH / 2
            ));
        }

        if let Some(evs) = &pokemon.evs {
            for error in Vec::<String>::from(validate_evs(evs)) {
                report.add_error(format!("{name}: {error}"));
            }
        }
        if let Some(ivs) = &pokemon.ivs {
            for error in Vec::<String>::from(validate_ivs(ivs)) {
                report.add_error(format!("{name}: {error}"));
            }
        }

        report
    }
}
