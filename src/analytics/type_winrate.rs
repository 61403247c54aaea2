//! Win rate per primary type

use crate::pokedex::{type_label, Pokemon, TypeCode};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

/// Aggregated battle record for one primary type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeWinRate {
    /// Raw type code as stored
    pub type_code: String,
    pub label: String,
    pub wins: u64,
    pub battles: u64,
    /// Percent of battles won; 0 when the type never fought
    pub win_rate: f64,
}

/// Sort key for raw codes: known codes numerically, then anything else by text
fn code_order(a: &str, b: &str) -> Ordering {
    match (TypeCode::parse(a), TypeCode::parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Group by primary type and rank by win rate, best first
///
/// Equal win rates keep type-code order.
pub fn type_win_rates(roster: &[Pokemon]) -> Vec<TypeWinRate> {
    let mut grouped: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for p in roster {
        let entry = grouped.entry(p.type_1.as_str()).or_default();
        entry.0 += u64::from(p.victories);
        entry.1 += u64::from(p.battles);
    }

    let mut codes: Vec<(&str, (u64, u64))> = grouped.into_iter().collect();
    codes.sort_by(|a, b| code_order(a.0, b.0));

    let mut rates: Vec<TypeWinRate> = codes
        .into_iter()
        .map(|(code, (wins, battles))| TypeWinRate {
            type_code: code.to_string(),
            label: type_label(code),
            wins,
            battles,
            win_rate: if battles > 0 {
                wins as f64 / battles as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    rates.sort_by_key(|r| Reverse(OrderedFloat(r.win_rate)));
    rates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::StatBlock;

    fn mon(type_1: &str, victories: u32, battles: u32) -> Pokemon {
        let mut p = Pokemon::new(1, "P", type_1, None, StatBlock::default());
        p.victories = victories;
        p.battles = battles;
        p
    }

    #[test]
    fn test_groups_and_ranks() {
        let roster = vec![
            mon("9", 30, 100),
            mon("9", 50, 100),
            mon("10", 90, 100),
            mon("11", 10, 100),
        ];
        let rates = type_win_rates(&roster);

        let labels: Vec<&str> = rates.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Water", "Fire", "Grass"]);
        assert_eq!(rates[1].wins, 80);
        assert_eq!(rates[1].battles, 200);
        assert_eq!(rates[1].win_rate, 40.0);
    }

    #[test]
    fn test_no_battles_means_zero_rate() {
        let rates = type_win_rates(&[mon("3", 0, 0)]);
        assert_eq!(rates[0].win_rate, 0.0);
    }

    #[test]
    fn test_ties_keep_code_order_and_unknown_codes_last() {
        let roster = vec![mon("zz", 1, 2), mon("10", 1, 2), mon("2", 1, 2)];
        let rates = type_win_rates(&roster);
        let codes: Vec<&str> = rates.iter().map(|r| r.type_code.as_str()).collect();
        assert_eq!(codes, vec!["2", "10", "zz"]);
        assert_eq!(rates[2].label, "zz");
    }
}
