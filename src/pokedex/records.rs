//! Battle log and model metric rows

use crate::core::types::PokemonId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded battle from the `combats` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRecord {
    pub id: Uuid,
    pub first_pokemon: PokemonId,
    pub second_pokemon: PokemonId,
    pub winner: PokemonId,
    #[serde(default)]
    pub created_at: String,
}

impl CombatRecord {
    pub fn new(first: u32, second: u32, winner: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_pokemon: PokemonId(first),
            second_pokemon: PokemonId(second),
            winner: PokemonId(winner),
            created_at: String::new(),
        }
    }
}

/// What a trained model was predicting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Predicts win rates
    Regression,
    /// Predicts the legendary flag
    Classification,
    #[serde(other)]
    Other,
}

/// Evaluation metrics for one trained model from the `model_results` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub id: Uuid,
    pub model_name: String,
    pub model_type: ModelKind,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub mse: Option<f64>,
    #[serde(default)]
    pub mae: Option<f64>,
    #[serde(default)]
    pub r2_score: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
}

impl ModelResult {
    /// Empty metric row for a named model
    pub fn new(model_name: impl Into<String>, model_type: ModelKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            model_name: model_name.into(),
            model_type,
            accuracy: None,
            mse: None,
            mae: None,
            r2_score: None,
            precision: None,
            recall: None,
            f1_score: None,
        }
    }
}
