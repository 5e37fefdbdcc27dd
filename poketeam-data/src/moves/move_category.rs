use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines which attacking and defending stats are used.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "物理"]
    #[alias = "Physical"]
    #[default]
    Physical,
    #[string = "特殊"]
    #[alias = "Special"]
    Special,
    #[string = "変化"]
    #[alias = "Status"]
    Status,
}
