use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "attack"]
    #[alias = "atk"]
    Attack,
    #[string = "defense"]
    #[alias = "def"]
    Defense,
    #[string = "specialAttack"]
    #[alias = "spAttack"]
    #[alias = "spa"]
    #[alias = "Special Attack"]
    SpecialAttack,
    #[string = "specialDefense"]
    #[alias = "spDefense"]
    #[alias = "spd"]
    #[alias = "Special Defense"]
    SpecialDefense,
    #[string = "speed"]
    #[alias = "spe"]
    Speed,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// The key of the stat in serialized stat tables.
    pub fn key(&self) -> &'static str {
        match self {
            Self::HP => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "specialAttack",
            Self::SpecialDefense => "specialDefense",
            Self::Speed => "speed",
        }
    }

    /// Is the stat HP?
    pub fn is_hp(&self) -> bool {
        *self == Self::HP
    }
}

fn next_stat_for_iterator(stat: Stat) -> Option<Stat> {
    match stat {
        Stat::HP => Some(Stat::Attack),
        Stat::Attack => Some(Stat::Defense),
        Stat::Defense => Some(Stat::SpecialAttack),
        Stat::SpecialAttack => Some(Stat::SpecialDefense),
        Stat::SpecialDefense => Some(Stat::Speed),
        Stat::Speed => None,
    }
}

/// Iterator over the entries of a [`StatTable`].
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    next_stat: Option<Stat>,
}

impl<'s> StatTableEntries<'s> {
    /// Creates a new iterator over the entries of a [`StatTable`].
    fn new(table: &'s StatTable) -> Self {
        Self {
            table,
            next_stat: Some(Stat::HP),
        }
    }
}

impl<'s> Iterator for StatTableEntries<'s> {
    type Item = (Stat, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.table.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

/// A full table of per-stat integers.
///
/// Used for base stats, individual values, effort values, and computed stats alike. Values are
/// signed so that out-of-range user input survives until validation reports it.
///
/// Base stats in the species dataset use `spAttack` and `spDefense` as keys, so both spellings are
/// accepted when deserializing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTable {
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default, alias = "spAttack")]
    pub special_attack: i32,
    #[serde(default, alias = "spDefense")]
    pub special_defense: i32,
    #[serde(default)]
    pub speed: i32,
}

impl StatTable {
    /// Creates a table with the same value for every stat.
    pub fn uniform(value: i32) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::HP => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: i32) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries<'s>(&'s self) -> StatTableEntries<'s> {
        StatTableEntries::new(self)
    }

    /// Creates an iterator over all stat values.
    pub fn values<'s>(&'s self) -> impl Iterator<Item = i32> + 's {
        self.entries().map(|(_, value)| value)
    }

    /// Sums up all stats in the table.
    pub fn sum(&self) -> i64 {
        self.values().map(|value| value as i64).sum()
    }
}

impl FromIterator<(Stat, i32)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, i32)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'s> IntoIterator for &'s StatTable {
    type IntoIter = StatTableEntries<'s>;
    type Item = (Stat, i32);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
