use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data about a particular species, as stored in the species dataset.
///
/// Alternate formes and mega evolutions are separate records that point back at their base
/// species through [`SpeciesData::form_of`] or [`SpeciesData::mega_of`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesData {
    /// Unique ID of the record.
    pub id: u32,
    /// Internal name, in lowercase English.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Japanese display name.
    pub name_ja: String,
    /// Sprite URL.
    #[serde(default)]
    pub sprite: String,
    /// Types, primary first.
    pub types: Vec<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Abilities.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Hidden ability, if it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_ability: Option<String>,
    /// The base species, if this record is a mega evolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mega_of: Option<u32>,
    /// The base species, if this record is an alternate forme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_of: Option<u32>,
}

impl SpeciesData {
    /// The ID of the base species this record belongs to.
    ///
    /// Only one level of indirection is followed.
    pub fn base_species_id(&self) -> u32 {
        self.mega_of.or(self.form_of).unwrap_or(self.id)
    }

    /// Checks if the species matches a search term.
    ///
    /// The Japanese name is matched exactly as typed, English names case-insensitively, and the ID
    /// as a substring of its decimal form.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        let lower = term.to_lowercase();
        self.name_ja.contains(term)
            || self.name_en.to_lowercase().contains(&lower)
            || self.name.to_lowercase().contains(&lower)
            || self.id.to_string().contains(term)
    }
}

#[cfg(test)]
mod species_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        SpeciesData,
        Type,
    };

    fn mega_charizard_x() -> SpeciesData {
        serde_json::from_str(
            r#"{
                "id": 10034,
                "name": "charizard-mega-x",
                "nameEn": "Charizard Mega X",
                "nameJa": "メガリザードンX",
                "sprite": "",
                "types": ["ほのお", "ドラゴン"],
                "baseStats": {"hp":78,"attack":130,"defense":111,"spAttack":130,"spDefense":85,"speed":100},
                "abilities": ["かたいツメ"],
                "megaOf": 6
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_dataset_record() {
        let species = mega_charizard_x();
        assert_eq!(species.types, vec![Type::Fire, Type::Dragon]);
        assert_eq!(species.base_stats.special_attack, 130);
        assert_eq!(species.mega_of, Some(6));
        assert_eq!(species.form_of, None);
    }

    #[test]
    fn resolves_base_species_id() {
        let mut species = mega_charizard_x();
        assert_eq!(species.base_species_id(), 6);
        species.mega_of = None;
        assert_eq!(species.base_species_id(), 10034);
    }

    #[test]
    fn matches_search_terms() {
        let species = mega_charizard_x();
        assert!(species.matches("リザードン"));
        assert!(species.matches("charizard"));
        assert!(species.matches("MEGA"));
        assert!(species.matches("1003"));
        assert!(!species.matches("ピカチュウ"));
        assert!(!species.matches("  "));
    }
}
