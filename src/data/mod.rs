//! Loading dataset rows from disk or from the hosted tables

pub mod json_store;
pub mod rest_client;

pub use json_store::JsonStore;
pub use rest_client::{RestClient, TableQuery};

use crate::pokedex::{CombatRecord, ModelResult, Pokedex, Pokemon};

/// Table names shared by both sources
pub const POKEMON_TABLE: &str = "pokemon";
pub const COMBATS_TABLE: &str = "combats";
pub const MODEL_RESULTS_TABLE: &str = "model_results";

/// All rows the dashboard works with
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pokemon: Vec<Pokemon>,
    pub combats: Vec<CombatRecord>,
    pub models: Vec<ModelResult>,
}

impl Dataset {
    /// Index the roster for id and name lookups
    pub fn pokedex(&self) -> Pokedex {
        Pokedex::new(self.pokemon.clone())
    }
}
