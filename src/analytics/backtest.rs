//! Replays recorded combats through the battle predictor
//!
//! Uses rayon; every replay is independent.

use crate::combat::predict;
use crate::pokedex::{CombatRecord, Pokedex};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of replaying one recorded combat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Correct,
    Wrong,
    /// One of the fighters is not in the roster
    Skipped,
}

/// How often the heuristic agrees with the battle log
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BacktestReport {
    pub evaluated: usize,
    pub skipped: usize,
    pub correct: usize,
    /// Percent of evaluated combats predicted correctly; 0 when none evaluated
    pub accuracy: f64,
}

fn replay(dex: &Pokedex, combat: &CombatRecord) -> Replay {
    let (Some(first), Some(second)) = (dex.get(combat.first_pokemon), dex.get(combat.second_pokemon)) else {
        return Replay::Skipped;
    };
    if predict(first, second).winner.id == combat.winner {
        Replay::Correct
    } else {
        Replay::Wrong
    }
}

/// Score the predictor against every recorded combat
pub fn backtest(dex: &Pokedex, combats: &[CombatRecord]) -> BacktestReport {
    let outcomes: Vec<Replay> = combats.par_iter().map(|c| replay(dex, c)).collect();

    let skipped = outcomes.iter().filter(|&&r| r == Replay::Skipped).count();
    let correct = outcomes.iter().filter(|&&r| r == Replay::Correct).count();
    let evaluated = outcomes.len() - skipped;

    if skipped > 0 {
        tracing::warn!(skipped, "combats reference pokemon missing from the roster");
    }

    let accuracy = if evaluated == 0 {
        0.0
    } else {
        correct as f64 / evaluated as f64 * 100.0
    };
    tracing::info!(evaluated, correct, accuracy, "backtest finished");

    BacktestReport {
        evaluated,
        skipped,
        correct,
        accuracy,
    }
}
