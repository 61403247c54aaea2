//! Dataset rows exported as JSON arrays, one file per table

use crate::core::error::{DashError, Result};
use crate::data::{Dataset, COMBATS_TABLE, MODEL_RESULTS_TABLE, POKEMON_TABLE};
use crate::pokedex::{CombatRecord, ModelResult, Pokemon};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Directory of `<table>.json` files
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.json", table))
    }

    /// Read a table; `None` when its file does not exist
    fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Option<Vec<T>>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let rows: Vec<T> = serde_json::from_str(&contents)?;
        tracing::info!(table, rows = rows.len(), path = %path.display(), "loaded table");
        Ok(Some(rows))
    }

    /// Pokemon rows; the file is required
    pub fn pokemon(&self) -> Result<Vec<Pokemon>> {
        self.read_table(POKEMON_TABLE)?
            .ok_or_else(|| DashError::MissingDataset(self.table_path(POKEMON_TABLE).display().to_string()))
    }

    /// Combat rows; empty when the file is absent
    pub fn combats(&self) -> Result<Vec<CombatRecord>> {
        Ok(self.read_table(COMBATS_TABLE)?.unwrap_or_default())
    }

    /// Model metric rows; empty when the file is absent
    pub fn model_results(&self) -> Result<Vec<ModelResult>> {
        Ok(self.read_table(MODEL_RESULTS_TABLE)?.unwrap_or_default())
    }

    pub fn load(&self) -> Result<Dataset> {
        Ok(Dataset {
            pokemon: self.pokemon()?,
            combats: self.combats()?,
            models: self.model_results()?,
        })
    }
}
