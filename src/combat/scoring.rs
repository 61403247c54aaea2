//! Stat aggregation for battle prediction

use crate::combat::advantage::advantage_table;
use crate::combat::constants::*;
use crate::pokedex::{Pokemon, StatBlock};
use serde::Serialize;

/// Weighted combination of the six stats
pub fn battle_score(stats: &StatBlock) -> f64 {
    f64::from(stats.hp) * HP_WEIGHT
        + f64::from(stats.attack) * ATTACK_WEIGHT
        + f64::from(stats.defense) * DEFENSE_WEIGHT
        + f64::from(stats.sp_attack) * SP_ATTACK_WEIGHT
        + f64::from(stats.sp_defense) * SP_DEFENSE_WEIGHT
        + f64::from(stats.speed) * SPEED_WEIGHT
}

/// Every intermediate number for one side of a matchup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Unweighted stat total (explanation only)
    pub total_stats: u64,
    pub battle_score: f64,
    /// Type multiplier with this side attacking
    pub type_multiplier: f64,
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Score `attacker` against `defender`
    pub fn compute(attacker: &Pokemon, defender: &Pokemon) -> Self {
        let battle_score = battle_score(&attacker.stats);
        let type_multiplier = advantage_table().multiplier(attacker, defender);
        Self {
            total_stats: attacker.stats.total(),
            battle_score,
            type_multiplier,
            final_score: battle_score * type_multiplier,
        }
    }

    pub fn has_type_advantage(&self) -> bool {
        self.type_multiplier > NEUTRAL_MULTIPLIER
    }
}
