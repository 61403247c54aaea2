//! Dataset records and the in-memory roster index

pub mod pokemon;
pub mod records;
pub mod type_code;

pub use pokemon::{Pokemon, StatBlock};
pub use records::{CombatRecord, ModelKind, ModelResult};
pub use type_code::{type_label, TypeCode, NO_TYPE_SENTINEL, TYPE_COUNT};

use crate::core::error::{DashError, Result};
use crate::core::types::PokemonId;
use ahash::AHashMap;

/// Roster of pokemon indexed by pokedex number
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: Vec<Pokemon>,
    by_id: AHashMap<PokemonId, usize>,
}

impl Pokedex {
    /// Build an index over a roster. A repeated id keeps its first row.
    pub fn new(entries: Vec<Pokemon>) -> Self {
        let mut by_id = AHashMap::with_capacity(entries.len());
        for (idx, p) in entries.iter().enumerate() {
            if by_id.contains_key(&p.id) {
                tracing::warn!(id = %p.id, name = %p.name, "duplicate pokemon id ignored in index");
                continue;
            }
            by_id.insert(p.id, idx);
        }
        Self { entries, by_id }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Pokemon] {
        &self.entries
    }

    pub fn get(&self, id: PokemonId) -> Option<&Pokemon> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Look up by pokedex number or by case-insensitive name
    pub fn find(&self, query: &str) -> Result<&Pokemon> {
        let query = query.trim();
        if let Ok(number) = query.parse::<u32>() {
            if let Some(p) = self.get(PokemonId(number)) {
                return Ok(p);
            }
        }

        self.entries
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(query))
            .ok_or_else(|| DashError::PokemonNotFound(query.to_string()))
    }

    /// Roster ordered by name, as offered for selection
    pub fn sorted_by_name(&self) -> Vec<&Pokemon> {
        let mut sorted: Vec<&Pokemon> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}
