//! Dataset summary figures

use crate::pokedex::{CombatRecord, Pokemon};
use ahash::AHashSet;
use serde::Serialize;

/// Mean of the headline stats over a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatAverages {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
}

impl StatAverages {
    /// Averages over `roster`; all zero when it is empty
    pub fn from_roster(roster: &[Pokemon]) -> Self {
        if roster.is_empty() {
            return Self::default();
        }
        let n = roster.len() as f64;
        let mean = |f: fn(&Pokemon) -> u32| roster.iter().map(|p| f64::from(f(p))).sum::<f64>() / n;
        Self {
            hp: mean(|p| p.stats.hp),
            attack: mean(|p| p.stats.attack),
            defense: mean(|p| p.stats.defense),
            speed: mean(|p| p.stats.speed),
        }
    }

    /// Largest of the four averages, used to scale bars
    pub fn peak(&self) -> f64 {
        [self.hp, self.attack, self.defense, self.speed]
            .into_iter()
            .fold(0.0, f64::max)
    }

    /// (label, value) pairs in display order
    pub fn labelled(&self) -> [(&'static str, f64); 4] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Speed", self.speed),
        ]
    }
}

/// Headline numbers for the loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetOverview {
    pub pokemon_count: usize,
    pub legendary_count: usize,
    /// Legendary share of the roster in percent
    pub legendary_percent: f64,
    pub generation_count: usize,
    pub combat_count: usize,
    pub averages: StatAverages,
    /// Lowest pokedex numbers first
    pub sample: Vec<Pokemon>,
}

impl DatasetOverview {
    pub fn compute(roster: &[Pokemon], combats: &[CombatRecord], sample_size: usize) -> Self {
        let legendary_count = roster.iter().filter(|p| p.legendary).count();
        let legendary_percent = if roster.is_empty() {
            0.0
        } else {
            legendary_count as f64 / roster.len() as f64 * 100.0
        };
        let generation_count = roster
            .iter()
            .map(|p| p.generation)
            .collect::<AHashSet<_>>()
            .len();

        let mut sample: Vec<Pokemon> = roster.to_vec();
        sample.sort_by_key(|p| p.id);
        sample.truncate(sample_size);

        Self {
            pokemon_count: roster.len(),
            legendary_count,
            legendary_percent,
            generation_count,
            combat_count: combats.len(),
            averages: StatAverages::from_roster(roster),
            sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::StatBlock;

    fn mon(id: u32, hp: u32, speed: u32, generation: u32, legendary: bool) -> Pokemon {
        let mut p = Pokemon::new(id, format!("P{}", id), "18", None, StatBlock::new(hp, 10, 20, 0, 0, speed));
        p.generation = generation;
        p.legendary = legendary;
        p
    }

    #[test]
    fn test_averages_and_peak() {
        let roster = vec![mon(1, 40, 100, 1, false), mon(2, 60, 50, 1, false)];
        let avg = StatAverages::from_roster(&roster);
        assert_eq!(avg.hp, 50.0);
        assert_eq!(avg.attack, 10.0);
        assert_eq!(avg.defense, 20.0);
        assert_eq!(avg.speed, 75.0);
        assert_eq!(avg.peak(), 75.0);
    }

    #[test]
    fn test_empty_roster_is_all_zero() {
        let avg = StatAverages::from_roster(&[]);
        assert_eq!(avg, StatAverages::default());
        assert_eq!(avg.peak(), 0.0);

        let overview = DatasetOverview::compute(&[], &[], 10);
        assert_eq!(overview.legendary_percent, 0.0);
        assert!(overview.sample.is_empty());
    }

    #[test]
    fn test_overview_counts_and_sample_order() {
        let roster = vec![
            mon(3, 1, 1, 1, false),
            mon(1, 1, 1, 1, true),
            mon(2, 1, 1, 2, false),
            mon(4, 1, 1, 3, false),
        ];
        let combats = vec![CombatRecord::new(1, 2, 1)];
        let overview = DatasetOverview::compute(&roster, &combats, 2);

        assert_eq!(overview.pokemon_count, 4);
        assert_eq!(overview.legendary_count, 1);
        assert_eq!(overview.legendary_percent, 25.0);
        assert_eq!(overview.generation_count, 3);
        assert_eq!(overview.combat_count, 1);
        let ids: Vec<u32> = overview.sample.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
