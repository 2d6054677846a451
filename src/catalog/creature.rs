use std::fmt;
use std::str::FromStr;

use crate::error::TeamBuilderError;

/// Lowest generation a creature can belong to
pub const FIRST_GENERATION: u8 = 1;

/// Highest generation a creature can belong to
pub const LAST_GENERATION: u8 = 7;

/// Closed set of type tags a creature can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreatureType {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl CreatureType {
    /// Every type tag, in menu order
    pub const ALL: [CreatureType; 18] = [
        CreatureType::Bug,
        CreatureType::Dark,
        CreatureType::Dragon,
        CreatureType::Electric,
        CreatureType::Fairy,
        CreatureType::Fighting,
        CreatureType::Fire,
        CreatureType::Flying,
        CreatureType::Ghost,
        CreatureType::Grass,
        CreatureType::Ground,
        CreatureType::Ice,
        CreatureType::Normal,
        CreatureType::Poison,
        CreatureType::Psychic,
        CreatureType::Rock,
        CreatureType::Steel,
        CreatureType::Water,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureType::Bug => "BUG",
            CreatureType::Dark => "DARK",
            CreatureType::Dragon => "DRAGON",
            CreatureType::Electric => "ELECTRIC",
            CreatureType::Fairy => "FAIRY",
            CreatureType::Fighting => "FIGHTING",
            CreatureType::Fire => "FIRE",
            CreatureType::Flying => "FLYING",
            CreatureType::Ghost => "GHOST",
            CreatureType::Grass => "GRASS",
            CreatureType::Ground => "GROUND",
            CreatureType::Ice => "ICE",
            CreatureType::Normal => "NORMAL",
            CreatureType::Poison => "POISON",
            CreatureType::Psychic => "PSYCHIC",
            CreatureType::Rock => "ROCK",
            CreatureType::Steel => "STEEL",
            CreatureType::Water => "WATER",
        }
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatureType {
    type Err = TeamBuilderError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CreatureType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TeamBuilderError::UnknownType(wanted.to_string()))
    }
}

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub type_one: CreatureType,
    /// Absent for single-type creatures
    pub type_two: Option<CreatureType>,
    pub generation: u8,
    /// Not required to be unique
    pub dex_number: u32,
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        type_one: CreatureType,
        type_two: Option<CreatureType>,
        generation: u8,
        dex_number: u32,
    ) -> Self {
        Self {
            name: name.into(),
            type_one,
            type_two,
            generation,
            dex_number,
        }
    }

    /// Iterate over the one or two type tags of this creature
    pub fn types(&self) -> impl Iterator<Item = CreatureType> {
        std::iter::once(self.type_one).chain(self.type_two)
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tDex Number: {}", self.dex_number)?;
        writeln!(f, "\tPokemon: {}", self.name)?;
        write!(f, "\tType: {}", self.type_one)?;
        if let Some(second) = self.type_two {
            write!(f, ", {}", second)?;
        }
        write!(f, "\n\tGeneration: {}", self.generation)
    }
}
