pub mod advantage;
pub mod constants;
pub mod explanation;
pub mod resolution;
pub mod scoring;

pub use advantage::{advantage_table, type_multiplier, AdvantageTable};
pub use explanation::{explain, explanation_sentences, ExplanationContext};
pub use resolution::{predict, win_probability, Prediction, TIE_WINNER};
pub use scoring::{battle_score, ScoreBreakdown};
