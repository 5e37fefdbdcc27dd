use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;

use crate::{
    common::{
        timestamp,
        truncate_chars,
    },
    error::TeamError,
    teams::Pokemon,
};

/// Maximum number of Pokémon on a team.
pub const MAX_TEAM_SIZE: usize = 6;
/// Maximum length of a team name, in characters.
pub const MAX_TEAM_NAME_LENGTH: usize = 30;
/// Name given to a team when none is entered.
pub const DEFAULT_TEAM_NAME: &str = "マイパーティ";

/// The battle format a team is built for.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BattleFormat {
    #[string = "singles"]
    #[default]
    Singles,
    #[string = "doubles"]
    Doubles,
}

/// A team of up to [`MAX_TEAM_SIZE`] Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<Pokemon>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<BattleFormat>,
}

impl Team {
    /// Creates a new, empty singles team.
    ///
    /// The name is normalized the same way as [`Team::set_name`].
    pub fn new<S>(name: S) -> Self
    where
        S: AsRef<str>,
    {
        let now = timestamp::now();
        let mut team = Self {
            id: format!("team-{}", Uuid::new_v4()),
            name: String::new(),
            pokemon: Vec::new(),
            created_at: now,
            updated_at: now,
            format: Some(BattleFormat::Singles),
        };
        team.set_name(name);
        team
    }

    /// Sets the team name.
    ///
    /// Names are cut to [`MAX_TEAM_NAME_LENGTH`] characters, and an empty name becomes
    /// [`DEFAULT_TEAM_NAME`].
    pub fn set_name<S>(&mut self, name: S)
    where
        S: AsRef<str>,
    {
        let name = truncate_chars(name.as_ref(), MAX_TEAM_NAME_LENGTH);
        self.name = if name.is_empty() {
            DEFAULT_TEAM_NAME.to_owned()
        } else {
            name.to_owned()
        };
    }

    /// Marks the team as updated now.
    pub fn touch(&mut self) {
        self.updated_at = timestamp::now();
    }

    /// Are all slots filled?
    pub fn is_full(&self) -> bool {
        self.pokemon.len() >= MAX_TEAM_SIZE
    }

    /// Looks up a Pokémon by id.
    pub fn get_pokemon(&self, id: &str) -> Option<&Pokemon> {
        self.pokemon.iter().find(|pokemon| pokemon.id == id)
    }

    /// Adds a Pokémon to the end of the roster.
    pub fn add_pokemon(&mut self, pokemon: Pokemon) -> Result<(), TeamError> {
        if self.is_full() {
            return Err(TeamError::RosterFull { max: MAX_TEAM_SIZE });
        }
        self.pokemon.push(pokemon);
        Ok(())
    }

    /// Replaces the Pokémon with the same id, keeping its slot.
    pub fn replace_pokemon(&mut self, pokemon: Pokemon) -> Result<(), TeamError> {
        let slot = self
            .pokemon
            .iter_mut()
            .find(|slot| slot.id == pokemon.id)
            .ok_or_else(|| TeamError::PokemonNotFound {
                id: pokemon.id.clone(),
            })?;
        *slot = pokemon;
        Ok(())
    }

    /// Removes the Pokémon with the given id.
    pub fn remove_pokemon(&mut self, id: &str) -> Option<Pokemon> {
        let index = self.pokemon.iter().position(|pokemon| pokemon.id == id)?;
        Some(self.pokemon.remove(index))
    }

    /// Clears the roster.
    pub fn reset(&mut self) {
        self.pokemon.clear();
    }
}

#[cfg(test)]
mod team_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::{
        error::TeamError,
        teams::{
            BattleFormat,
            Pokemon,
            Team,
        },
    };

    fn pokemon(id: &str) -> Pokemon {
        let mut pokemon = Pokemon::new(
            25,
            "ピカチュウ",
            "せいでんき",
            vec!["でんこうせっか".to_owned()],
        );
        pokemon.id = id.to_owned();
        pokemon
    }

    #[test]
    fn creates_empty_singles_team() {
        let team = Team::new("テスト");
        assert!(team.id.starts_with("team-"));
        assert_eq!(team.name, "テスト");
        assert!(team.pokemon.is_empty());
        assert_eq!(team.format, Some(BattleFormat::Singles));
        assert_eq!(team.created_at, team.updated_at);
        assert_ne!(team.id, Team::new("テスト").id);
    }

    #[test]
    fn normalizes_name() {
        assert_eq!(Team::new("").name, "マイパーティ");
        let long = "あ".repeat(40);
        assert_eq!(Team::new(&long).name, "あ".repeat(30));
    }

    #[test]
    fn touch_moves_updated_at_forward() {
        let mut team = Team::new("a");
        let created_at = team.created_at;
        team.touch();
        assert_eq!(team.created_at, created_at);
        assert!(team.updated_at >= created_at);
    }

    #[test]
    fn adds_up_to_six_pokemon() {
        let mut team = Team::new("a");
        for i in 0..6 {
            assert_matches!(team.add_pokemon(pokemon(&i.to_string())), Ok(()));
        }
        assert!(team.is_full());
        assert_matches!(
            team.add_pokemon(pokemon("7")),
            Err(TeamError::RosterFull { max: 6 })
        );
        assert_eq!(team.pokemon.len(), 6);
        assert_eq!(team.get_pokemon("7"), None);
    }

    #[test]
    fn replaces_pokemon_in_place() {
        let mut team = Team::new("a");
        team.add_pokemon(pokemon("a")).unwrap();
        team.add_pokemon(pokemon("b")).unwrap();

        let mut edited = pokemon("a");
        edited.level = 100;
        assert_matches!(team.replace_pokemon(edited), Ok(()));
        assert_eq!(team.pokemon[0].level, 100);
        assert_eq!(team.pokemon[1].id, "b");

        assert_matches!(
            team.replace_pokemon(pokemon("c")),
            Err(TeamError::PokemonNotFound { id }) => {
                assert_eq!(id, "c");
            }
        );
    }

    #[test]
    fn removes_and_resets() {
        let mut team = Team::new("a");
        team.add_pokemon(pokemon("a")).unwrap();
        team.add_pokemon(pokemon("b")).unwrap();
        assert_eq!(team.remove_pokemon("a").map(|p| p.id), Some("a".to_owned()));
        assert_eq!(team.remove_pokemon("a"), None);
        assert_eq!(team.pokemon.len(), 1);
        team.reset();
        assert!(team.pokemon.is_empty());
    }

    #[test]
    fn keeps_missing_format_missing() {
        let team: Team = serde_json::from_str(
            r#"{"id":"team-1","name":"x","pokemon":[],"createdAt":"2024-05-01T12:34:56.789Z","updatedAt":"2024-05-01T12:34:56.789Z"}"#,
        )
        .unwrap();
        assert_eq!(team.format, None);
        assert!(!serde_json::to_string(&team).unwrap().contains("format"));
    }
}
