//! Battle outcome prediction
//!
//! Scores both sides, picks a winner and explains why. Deterministic and
//! free of side effects: the same pair always gives the same prediction.

use crate::combat::constants::EVEN_ODDS_PERCENT;
use crate::combat::explanation::{explain, ExplanationContext};
use crate::combat::scoring::ScoreBreakdown;
use crate::core::types::Side;
use crate::pokedex::Pokemon;
use serde::Serialize;

/// How exactly equal final scores are settled: the first-provided pokemon wins
pub const TIE_WINNER: Side = Side::First;

/// Result of a predicted battle
#[derive(Debug, Clone, Serialize)]
pub struct Prediction<'a> {
    pub winner: &'a Pokemon,
    pub loser: &'a Pokemon,
    /// Which argument won
    pub winner_side: Side,
    /// Winner's share of the combined final score, in percent
    pub win_probability: f64,
    pub explanation: String,
    pub winner_score: ScoreBreakdown,
    pub loser_score: ScoreBreakdown,
    /// Final scores were equal and [`TIE_WINNER`] decided
    pub decided_by_tie_break: bool,
}

impl<'a> Prediction<'a> {
    /// The two pokemon in argument order
    pub fn contestants(&self) -> (&'a Pokemon, &'a Pokemon) {
        match self.winner_side {
            Side::First => (self.winner, self.loser),
            Side::Second => (self.loser, self.winner),
        }
    }

    /// Probability of the losing side, in percent
    pub fn loser_probability(&self) -> f64 {
        100.0 - self.win_probability
    }
}

/// Winner's share of the combined score, in percent
///
/// Two zero scores have no meaningful share and report even odds.
pub fn win_probability(winner_score: f64, loser_score: f64) -> f64 {
    let total = winner_score + loser_score;
    if total == 0.0 {
        EVEN_ODDS_PERCENT
    } else {
        winner_score / total * 100.0
    }
}

/// Predict the winner of `first` against `second`
///
/// Swapping the arguments names the same winner with the same probability
/// whenever the final scores differ. Exactly equal scores go to
/// [`TIE_WINNER`], so for a tie the winner follows argument order.
pub fn predict<'a>(first: &'a Pokemon, second: &'a Pokemon) -> Prediction<'a> {
    let first_score = ScoreBreakdown::compute(first, second);
    let second_score = ScoreBreakdown::compute(second, first);

    let tied = first_score.final_score == second_score.final_score;
    let winner_side = if tied {
        TIE_WINNER
    } else if first_score.final_score > second_score.final_score {
        Side::First
    } else {
        Side::Second
    };

    let (winner, loser, winner_score, loser_score) = match winner_side {
        Side::First => (first, second, first_score, second_score),
        Side::Second => (second, first, second_score, first_score),
    };

    let explanation = explain(&ExplanationContext {
        winner,
        loser,
        winner_score: &winner_score,
        loser_score: &loser_score,
    });
    let win_probability = win_probability(winner_score.final_score, loser_score.final_score);

    tracing::debug!(
        first = %first.name,
        second = %second.name,
        winner = %winner.name,
        probability = win_probability,
        tie_break = tied,
        "battle predicted"
    );

    Prediction {
        winner,
        loser,
        winner_side,
        win_probability,
        explanation,
        winner_score,
        loser_score,
        decided_by_tie_break: tied,
    }
}
