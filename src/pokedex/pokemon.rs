//! Pokemon rows as stored in the `pokemon` table

use crate::core::types::PokemonId;
use crate::pokedex::type_code::{TypeCode, NO_TYPE_SENTINEL};
use serde::{Deserialize, Serialize};

/// The six base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(rename = "points_de_vie")]
    pub hp: u32,
    #[serde(rename = "points_attaque")]
    pub attack: u32,
    #[serde(rename = "points_deffence")]
    pub defense: u32,
    #[serde(rename = "points_attaque_speciale")]
    pub sp_attack: u32,
    #[serde(rename = "point_defense_speciale")]
    pub sp_defense: u32,
    #[serde(rename = "points_vitesse")]
    pub speed: u32,
}

impl StatBlock {
    pub fn new(hp: u32, attack: u32, defense: u32, sp_attack: u32, sp_defense: u32, speed: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }

    /// Sum of all six stats
    pub fn total(&self) -> u64 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|&s| u64::from(s))
        .sum()
    }
}

/// A pokemon with its stats and recorded battle history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(rename = "numero")]
    pub id: PokemonId,
    #[serde(rename = "nom")]
    pub name: String,
    /// Raw primary type code
    pub type_1: String,
    /// Raw secondary type code; `None`, `""` or `"0"` when single-typed
    #[serde(default)]
    pub type_2: Option<String>,
    #[serde(flatten)]
    pub stats: StatBlock,
    #[serde(rename = "nombre_generations", default)]
    pub generation: u32,
    #[serde(rename = "legendaire", default)]
    pub legendary: bool,
    #[serde(rename = "combats", default)]
    pub battles: u32,
    #[serde(rename = "victoires", default)]
    pub victories: u32,
    /// Fraction of recorded battles won, 0.0 to 1.0
    #[serde(rename = "taux_de_victoire", default)]
    pub win_rate: f64,
}

impl Pokemon {
    /// Minimal constructor for a pokemon with no battle history
    pub fn new(id: u32, name: impl Into<String>, type_1: &str, type_2: Option<&str>, stats: StatBlock) -> Self {
        Self {
            id: PokemonId(id),
            name: name.into(),
            type_1: type_1.to_string(),
            type_2: type_2.map(str::to_string),
            stats,
            generation: 1,
            legendary: false,
            battles: 0,
            victories: 0,
            win_rate: 0.0,
        }
    }

    pub fn primary_type(&self) -> Option<TypeCode> {
        TypeCode::parse(&self.type_1)
    }

    /// Secondary type, treating absent, empty and sentinel values alike
    pub fn secondary_type(&self) -> Option<TypeCode> {
        self.type_2.as_deref().and_then(TypeCode::parse)
    }

    /// Known type codes, primary first
    pub fn types(&self) -> impl Iterator<Item = TypeCode> {
        self.primary_type().into_iter().chain(self.secondary_type())
    }

    /// Whether the row carries a real second type (display purposes)
    pub fn has_secondary_type(&self) -> bool {
        matches!(self.type_2.as_deref(), Some(code) if !code.is_empty() && code != NO_TYPE_SENTINEL)
    }
}
