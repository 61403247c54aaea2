//! Static type-advantage table
//!
//! Deliberately partial: only 15 attacking codes have entries and the
//! relation is not symmetric. Some codes counter themselves (14, 17) and
//! 9 and 13 counter each other, so both directions of such a matchup get
//! the bonus.

use crate::combat::constants::{ADVANTAGE_FACTOR, NEUTRAL_MULTIPLIER};
use crate::pokedex::{Pokemon, TypeCode};
use ahash::{AHashMap, AHashSet};
use std::sync::OnceLock;

/// (attacker, defenders it is strong against)
const ADVANTAGES: &[(u8, &[u8])] = &[
    (6, &[9, 10, 12]),
    (4, &[6, 16, 2]),
    (9, &[4, 16, 13]),
    (5, &[4, 18]),
    (13, &[9]),
    (2, &[5, 6, 13]),
    (14, &[1, 14]),
    (1, &[12, 15]),
    (12, &[14, 17]),
    (17, &[14, 17]),
    (15, &[6, 2, 12]),
    (16, &[5, 13, 6]),
    (10, &[9, 14, 12]),
    (8, &[2, 9, 16]),
    (7, &[1, 10, 15]),
];

/// Attacker code -> defender codes it counters
#[derive(Debug, Clone, Default)]
pub struct AdvantageTable {
    strong_against: AHashMap<TypeCode, AHashSet<TypeCode>>,
}

impl AdvantageTable {
    fn from_entries(entries: &[(u8, &[u8])]) -> Self {
        let strong_against: AHashMap<TypeCode, AHashSet<TypeCode>> = entries
            .iter()
            .filter_map(|&(attacker, defenders)| {
                let attacker = TypeCode::new(attacker)?;
                let defenders: AHashSet<TypeCode> = defenders.iter().copied().filter_map(TypeCode::new).collect();
                Some((attacker, defenders))
            })
            .collect();
        Self { strong_against }
    }

    /// Does `attacker` counter `defender`?
    pub fn counters(&self, attacker: TypeCode, defender: TypeCode) -> bool {
        self.strong_against
            .get(&attacker)
            .is_some_and(|set| set.contains(&defender))
    }

    /// Number of attacking codes with at least one entry
    pub fn len(&self) -> usize {
        self.strong_against.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strong_against.is_empty()
    }

    /// Multiplier for `attacker` hitting `defender`
    ///
    /// Every (attacker type, defender type) pair found in the table applies
    /// one more factor, so a dual-typed attacker can stack up to four.
    pub fn multiplier(&self, attacker: &Pokemon, defender: &Pokemon) -> f64 {
        let mut multiplier = NEUTRAL_MULTIPLIER;
        for atk in attacker.types() {
            for def in defender.types() {
                if self.counters(atk, def) {
                    multiplier *= ADVANTAGE_FACTOR;
                }
            }
        }
        multiplier
    }
}

static TABLE: OnceLock<AdvantageTable> = OnceLock::new();

/// The process-wide advantage table
pub fn advantage_table() -> &'static AdvantageTable {
    TABLE.get_or_init(|| AdvantageTable::from_entries(ADVANTAGES))
}

/// Shorthand for [`AdvantageTable::multiplier`] on the global table
pub fn type_multiplier(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    advantage_table().multiplier(attacker, defender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::StatBlock;

    fn typed(type_1: &str, type_2: Option<&str>) -> Pokemon {
        Pokemon::new(1, "Test", type_1, type_2, StatBlock::default())
    }

    fn code(n: u8) -> TypeCode {
        TypeCode::new(n).unwrap()
    }

    #[test]
    fn test_table_has_every_entry() {
        assert_eq!(advantage_table().len(), ADVANTAGES.len());
    }

    #[test]
    fn test_table_is_not_symmetric() {
        let table = advantage_table();
        assert!(table.counters(code(6), code(9)));
        assert!(!table.counters(code(9), code(6)));
    }

    #[test]
    fn test_self_and_mutual_counters_preserved() {
        let table = advantage_table();
        assert!(table.counters(code(14), code(14)));
        assert!(table.counters(code(17), code(17)));
        assert!(table.counters(code(9), code(13)));
        assert!(table.counters(code(13), code(9)));
        assert!(table.counters(code(12), code(14)));
        assert!(!table.counters(code(14), code(12)));
    }

    #[test]
    fn test_single_match() {
        assert_eq!(type_multiplier(&typed("6", None), &typed("9", None)), 1.5);
        assert_eq!(type_multiplier(&typed("9", None), &typed("6", None)), 1.0);
    }

    #[test]
    fn test_mirror_match_both_directions_gain() {
        let a = typed("14", None);
        let b = typed("14", None);
        assert_eq!(type_multiplier(&a, &b), 1.5);
        assert_eq!(type_multiplier(&b, &a), 1.5);
    }

    #[test]
    fn test_single_typed_attacker_against_dual_defender() {
        // 6 counters both 9 and 10
        assert_eq!(type_multiplier(&typed("6", None), &typed("9", Some("10"))), 2.25);
    }

    #[test]
    fn test_four_matches_compound() {
        // 15 and 4 both counter 6 and 2
        let attacker = typed("15", Some("4"));
        let defender = typed("6", Some("2"));
        assert_eq!(type_multiplier(&attacker, &defender), 1.5_f64.powi(4));
        assert_eq!(type_multiplier(&attacker, &defender), 5.0625);
    }

    #[test]
    fn test_unknown_and_sentinel_codes_contribute_nothing() {
        let unknown = typed("99", Some("0"));
        let fire = typed("9", None);
        assert_eq!(type_multiplier(&unknown, &fire), 1.0);
        assert_eq!(type_multiplier(&fire, &unknown), 1.0);
        // 11 and 3 are known codes without entries of their own
        assert_eq!(type_multiplier(&typed("11", Some("3")), &fire), 1.0);
    }

    #[test]
    fn test_non_canonical_codes_contribute_nothing() {
        let fire = typed("9", None);
        let bug = typed("6", None);
        assert_eq!(type_multiplier(&bug, &fire), 1.5);
        assert_eq!(type_multiplier(&bug, &typed("11", Some("9"))), 1.5);
        for raw in ["06", "+6", " 6", "006"] {
            assert_eq!(type_multiplier(&typed(raw, None), &fire), 1.0, "attacker {:?}", raw);
        }
        for raw in ["09", "+9", " 9", "009"] {
            assert_eq!(type_multiplier(&bug, &typed("11", Some(raw))), 1.0, "defender {:?}", raw);
        }
    }
}
