use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "ノーマル"]
    #[alias = "Normal"]
    #[default]
    Normal,
    #[string = "ほのお"]
    #[alias = "Fire"]
    Fire,
    #[string = "みず"]
    #[alias = "Water"]
    Water,
    #[string = "でんき"]
    #[alias = "Electric"]
    Electric,
    #[string = "くさ"]
    #[alias = "Grass"]
    Grass,
    #[string = "こおり"]
    #[alias = "Ice"]
    Ice,
    #[string = "かくとう"]
    #[alias = "Fighting"]
    Fighting,
    #[string = "どく"]
    #[alias = "Poison"]
    Poison,
    #[string = "じめん"]
    #[alias = "Ground"]
    Ground,
    #[string = "ひこう"]
    #[alias = "Flying"]
    Flying,
    #[string = "エスパー"]
    #[alias = "Psychic"]
    Psychic,
    #[string = "むし"]
    #[alias = "Bug"]
    Bug,
    #[string = "いわ"]
    #[alias = "Rock"]
    Rock,
    #[string = "ゴースト"]
    #[alias = "Ghost"]
    Ghost,
    #[string = "ドラゴン"]
    #[alias = "Dragon"]
    Dragon,
    #[string = "あく"]
    #[alias = "Dark"]
    Dark,
    #[string = "はがね"]
    #[alias = "Steel"]
    Steel,
    #[string = "フェアリー"]
    #[alias = "Fairy"]
    Fairy,
}

#[cfg(test)]
mod type_test {
    use crate::{
        mons::Type,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_japanese_label() {
        test_string_serialization(Type::Fire, "ほのお");
        test_string_serialization(Type::Psychic, "エスパー");
        test_string_serialization(Type::Fairy, "フェアリー");
    }

    #[test]
    fn deserializes_english_alias() {
        test_string_deserialization("dragon", Type::Dragon);
        test_string_deserialization("Steel", Type::Steel);
    }
}
