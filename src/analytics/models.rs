//! Model evaluation summary

use crate::pokedex::{ModelKind, ModelResult};
use serde::Serialize;

/// Models split by task with the best of each
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelEvaluation {
    pub regression: Vec<ModelResult>,
    pub classification: Vec<ModelResult>,
    /// Highest R² among regression models
    pub best_regression: Option<ModelResult>,
    /// Highest accuracy among classification models
    pub best_classification: Option<ModelResult>,
}

/// First model with the highest metric; a missing metric counts as 0
fn best_by<F>(models: &[ModelResult], metric: F) -> Option<&ModelResult>
where
    F: Fn(&ModelResult) -> Option<f64>,
{
    models.iter().fold(None, |best, curr| match best {
        Some(b) if metric(curr).unwrap_or(0.0) <= metric(b).unwrap_or(0.0) => Some(b),
        _ => Some(curr),
    })
}

impl ModelEvaluation {
    pub fn compute(models: &[ModelResult]) -> Self {
        let of_kind = |kind: ModelKind| -> Vec<ModelResult> {
            models.iter().filter(|m| m.model_type == kind).cloned().collect()
        };
        let regression = of_kind(ModelKind::Regression);
        let classification = of_kind(ModelKind::Classification);

        let best_regression = best_by(&regression, |m| m.r2_score).cloned();
        let best_classification = best_by(&classification, |m| m.accuracy).cloned();

        Self {
            regression,
            classification,
            best_regression,
            best_classification,
        }
    }
}
