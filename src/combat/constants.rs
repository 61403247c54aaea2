//! Battle prediction constants - all tunable values in one place

// Stat weights for the battle score. Speed decides turn order and weighs most.
pub const HP_WEIGHT: f64 = 0.7;
pub const ATTACK_WEIGHT: f64 = 0.9;
pub const DEFENSE_WEIGHT: f64 = 0.8;
pub const SP_ATTACK_WEIGHT: f64 = 0.9;
pub const SP_DEFENSE_WEIGHT: f64 = 0.8;
pub const SPEED_WEIGHT: f64 = 1.2;

// Type matchups (MULTIPLICATIVE, one factor per matching attacker/defender pair)
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;
pub const ADVANTAGE_FACTOR: f64 = 1.5;

/// Probability reported when neither side has any score
pub const EVEN_ODDS_PERCENT: f64 = 50.0;
