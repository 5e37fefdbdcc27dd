use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of a specific Mon.
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
pub enum Gender {
    #[string = "不明"]
    #[alias = "Unknown"]
    #[alias = "U"]
    #[default]
    Unknown,
    #[string = "メス"]
    #[alias = "Female"]
    #[alias = "F"]
    Female,
    #[string = "オス"]
    #[alias = "Male"]
    #[alias = "M"]
    Male,
}
