//! Prediction explanation text
//!
//! The explanation is built from an ordered list of rules. Each rule looks at
//! the finished matchup and contributes at most one sentence; sentences keep
//! rule order.

use crate::combat::scoring::ScoreBreakdown;
use crate::pokedex::Pokemon;
use std::cmp::Ordering;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct ExplanationContext<'a> {
    pub winner: &'a Pokemon,
    pub loser: &'a Pokemon,
    pub winner_score: &'a ScoreBreakdown,
    pub loser_score: &'a ScoreBreakdown,
}

type Rule = fn(&ExplanationContext<'_>) -> Option<String>;

/// Rules in output order
const RULES: &[Rule] = &[stat_summary, type_edge, speed_comparison];

/// Always present. Quotes totals only when the winner's total is higher.
fn stat_summary(ctx: &ExplanationContext<'_>) -> Option<String> {
    let (won, lost) = (ctx.winner_score.total_stats, ctx.loser_score.total_stats);
    let detail = if won > lost {
        format!("({} vs {}).", won, lost)
    } else {
        "with better stat distribution.".to_string()
    };
    Some(format!("{} has stronger overall stats {}", ctx.winner.name, detail))
}

fn type_edge(ctx: &ExplanationContext<'_>) -> Option<String> {
    ctx.winner_score
        .has_type_advantage()
        .then(|| format!("Type advantage gives {} a significant edge.", ctx.winner.name))
}

/// Equal speed says nothing
fn speed_comparison(ctx: &ExplanationContext<'_>) -> Option<String> {
    let name = &ctx.winner.name;
    match ctx.winner.stats.speed.cmp(&ctx.loser.stats.speed) {
        Ordering::Greater => Some(format!("{}'s higher speed allows it to attack first.", name)),
        Ordering::Less => Some(format!(
            "Despite being slower, {}'s other advantages outweigh the speed difference.",
            name
        )),
        Ordering::Equal => None,
    }
}

/// Individual sentences, in rule order
pub fn explanation_sentences(ctx: &ExplanationContext<'_>) -> Vec<String> {
    RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

/// Full explanation paragraph
pub fn explain(ctx: &ExplanationContext<'_>) -> String {
    explanation_sentences(ctx).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::StatBlock;

    fn breakdown(total: u64, multiplier: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            total_stats: total,
            battle_score: 100.0,
            type_multiplier: multiplier,
            final_score: 100.0 * multiplier,
        }
    }

    fn mon(name: &str, speed: u32) -> Pokemon {
        Pokemon::new(1, name, "18", None, StatBlock::new(0, 0, 0, 0, 0, speed))
    }

    #[test]
    fn test_totals_quoted_when_winner_higher() {
        let (w, l) = (mon("Pikachu", 90), mon("Onix", 70));
        let (ws, ls) = (breakdown(320, 1.0), breakdown(300, 1.0));
        let text = explain(&ExplanationContext {
            winner: &w,
            loser: &l,
            winner_score: &ws,
            loser_score: &ls,
        });
        assert_eq!(
            text,
            "Pikachu has stronger overall stats (320 vs 300). \
             Pikachu's higher speed allows it to attack first."
        );
    }

    #[test]
    fn test_distribution_clause_when_winner_total_not_higher() {
        let (w, l) = (mon("Pikachu", 50), mon("Onix", 70));
        let (ws, ls) = (breakdown(300, 1.5), breakdown(300, 1.0));
        let sentences = explanation_sentences(&ExplanationContext {
            winner: &w,
            loser: &l,
            winner_score: &ws,
            loser_score: &ls,
        });
        assert_eq!(
            sentences,
            vec![
                "Pikachu has stronger overall stats with better stat distribution.".to_string(),
                "Type advantage gives Pikachu a significant edge.".to_string(),
                "Despite being slower, Pikachu's other advantages outweigh the speed difference."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_equal_speed_adds_no_sentence() {
        let (w, l) = (mon("Ditto", 48), mon("Mew", 48));
        let (ws, ls) = (breakdown(288, 1.0), breakdown(500, 1.0));
        let sentences = explanation_sentences(&ExplanationContext {
            winner: &w,
            loser: &l,
            winner_score: &ws,
            loser_score: &ls,
        });
        assert_eq!(sentences.len(), 1);
        assert!(!sentences[0].contains("speed"));
    }
}
