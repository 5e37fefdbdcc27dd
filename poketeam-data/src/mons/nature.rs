use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::mons::Stat;

/// How a nature affects a single stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NatureModifier {
    /// Stat is boosted by 10%.
    Boost,
    /// Stat is unaffected.
    Neutral,
    /// Stat is dropped by 10%.
    Drop,
}

impl NatureModifier {
    /// The modifier as a multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Boost => 1.1,
            Self::Neutral => 1.0,
            Self::Drop => 0.9,
        }
    }

    fn tenths(&self) -> i64 {
        match self {
            Self::Boost => 11,
            Self::Neutral => 10,
            Self::Drop => 9,
        }
    }

    /// Applies the modifier to a stat value, rounding down.
    ///
    /// Computed in integer tenths. For non-negative values this matches flooring the
    /// floating-point product. Negative values floor the exact product, so `-10` boosts to `-11`.
    pub fn apply(&self, value: i64) -> i64 {
        (value * self.tenths()).div_euclid(10)
    }
}

/// A Mon's nature, which boosts and drops particular stat values.
///
/// Labels are the Japanese names used by the team data. English names are accepted as aliases.
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
pub enum Nature {
    #[string = "がんばりや"]
    #[alias = "Hardy"]
    #[default]
    Hardy,
    #[string = "さみしがり"]
    #[alias = "Lonely"]
    Lonely,
    #[string = "ゆうかん"]
    #[alias = "Brave"]
    Brave,
    #[string = "いじっぱり"]
    #[alias = "Adamant"]
    Adamant,
    #[string = "やんちゃ"]
    #[alias = "Naughty"]
    Naughty,
    #[string = "ずぶとい"]
    #[alias = "Bold"]
    Bold,
    #[string = "すなお"]
    #[alias = "Docile"]
    Docile,
    #[string = "のんき"]
    #[alias = "Relaxed"]
    Relaxed,
    #[string = "わんぱく"]
    #[alias = "Impish"]
    Impish,
    #[string = "のうてんき"]
    #[alias = "Lax"]
    Lax,
    #[string = "おくびょう"]
    #[alias = "Timid"]
    Timid,
    #[string = "せっかち"]
    #[alias = "Hasty"]
    Hasty,
    #[string = "まじめ"]
    #[alias = "Serious"]
    Serious,
    #[string = "ようき"]
    #[alias = "Jolly"]
    Jolly,
    #[string = "むじゃき"]
    #[alias = "Naive"]
    Naive,
    #[string = "ひかえめ"]
    #[alias = "Modest"]
    Modest,
    #[string = "おっとり"]
    #[alias = "Mild"]
    Mild,
    #[string = "れいせい"]
    #[alias = "Quiet"]
    Quiet,
    #[string = "てれや"]
    #[alias = "Bashful"]
    Bashful,
    #[string = "うっかりや"]
    #[alias = "Rash"]
    Rash,
    #[string = "おだやか"]
    #[alias = "Calm"]
    Calm,
    #[string = "おとなしい"]
    #[alias = "Gentle"]
    Gentle,
    #[string = "なまいき"]
    #[alias = "Sassy"]
    Sassy,
    #[string = "しんちょう"]
    #[alias = "Careful"]
    Careful,
    #[string = "きまぐれ"]
    #[alias = "Quirky"]
    Quirky,
}

impl Nature {
    /// All natures.
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// The stat boosted by the nature.
    ///
    /// Bashful and Rash follow the team data's table rather than the games: Bashful boosts
    /// Special Attack and Rash boosts Special Defense.
    pub fn boosts(&self) -> Option<Stat> {
        match self {
            Self::Hardy | Self::Docile | Self::Serious | Self::Quirky => None,
            Self::Lonely | Self::Brave | Self::Adamant | Self::Naughty => Some(Stat::Attack),
            Self::Bold | Self::Relaxed | Self::Impish | Self::Lax => Some(Stat::Defense),
            Self::Timid | Self::Hasty | Self::Jolly | Self::Naive => Some(Stat::Speed),
            Self::Modest | Self::Mild | Self::Quiet | Self::Bashful => Some(Stat::SpecialAttack),
            Self::Rash | Self::Calm | Self::Gentle | Self::Sassy | Self::Careful => {
                Some(Stat::SpecialDefense)
            }
        }
    }

    /// The stat dropped by the nature.
    pub fn drops(&self) -> Option<Stat> {
        match self {
            Self::Hardy | Self::Docile | Self::Serious | Self::Quirky => None,
            Self::Bold | Self::Timid | Self::Modest | Self::Calm => Some(Stat::Attack),
            Self::Lonely | Self::Hasty | Self::Mild | Self::Gentle => Some(Stat::Defense),
            Self::Brave | Self::Relaxed | Self::Quiet | Self::Sassy => Some(Stat::Speed),
            Self::Adamant | Self::Impish | Self::Jolly | Self::Rash | Self::Careful => {
                Some(Stat::SpecialAttack)
            }
            Self::Naughty | Self::Lax | Self::Naive | Self::Bashful => Some(Stat::SpecialDefense),
        }
    }

    /// Does the nature leave every stat unchanged?
    pub fn is_neutral(&self) -> bool {
        self.boosts().is_none() && self.drops().is_none()
    }

    /// The modifier the nature applies to the given stat.
    ///
    /// HP is never modified.
    pub fn modifier(&self, stat: Stat) -> NatureModifier {
        if stat.is_hp() {
            NatureModifier::Neutral
        } else if self.boosts() == Some(stat) {
            NatureModifier::Boost
        } else if self.drops() == Some(stat) {
            NatureModifier::Drop
        } else {
            NatureModifier::Neutral
        }
    }
}
