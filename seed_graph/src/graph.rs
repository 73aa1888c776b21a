/// Seed Graph v3: Graph Utilities
///
/// Pure analysis over the rule table. Nothing here is fatal; findings
/// are reported by the caller.

use std::collections::BTreeSet;

use crate::config::StarterSet;
use crate::domain::{Element, Rule, Target};

// ---------------------------------------------------------------------------
// Reachability
// ---------------------------------------------------------------------------

/// Every identifier obtainable from the starters by repeated combination.
///
/// Fixpoint over the rule table: a result joins the set once both of its
/// inputs are in it. Combination is unordered so `left`/`right` order is
/// irrelevant.
pub fn reachable_from(rules: &[Rule], starters: &StarterSet) -> BTreeSet<String> {
    let mut reached: BTreeSet<String> = starters.clone();
    loop {
        let mut grew = false;
        for rule in rules {
            if reached.contains(&rule.result) {
                continue;
            }
            if reached.contains(&rule.left) && reached.contains(&rule.right) {
                reached.insert(rule.result.clone());
                grew = true;
            }
        }
        if !grew {
            return reached;
        }
    }
}

/// Target names the player can never produce. Sorted.
pub fn unreachable_targets(
    rules: &[Rule],
    targets: &[Target],
    starters: &StarterSet,
) -> Vec<String> {
    let reached = reachable_from(rules, starters);
    let names: BTreeSet<&str> = targets
        .iter()
        .map(|t| t.name.as_str())
        .filter(|name| !reached.contains(*name))
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Non-starter elements that no rule produces. Sorted.
pub fn unproduced_elements(catalog: &[Element], rules: &[Rule]) -> Vec<String> {
    let produced: BTreeSet<&str> = rules.iter().map(|r| r.result.as_str()).collect();
    catalog
        .iter()
        .filter(|e| !e.starter && !produced.contains(e.name.as_str()))
        .map(|e| e.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Glyph, Recipe};

    fn rule(left: &str, right: &str, result: &str) -> Rule {
        Rule {
            left: left.to_string(),
            right: right.to_string(),
            result: result.to_string(),
            emoji: String::new(),
            tags: Vec::new(),
        }
    }

    fn starters(names: &[&str]) -> StarterSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reachable_closure_ignores_rule_order() {
        // later rule unlocks an earlier one
        let rules = vec![rule("clay", "fire", "pottery"), rule("mud", "air", "clay")];
        let reached = reachable_from(&rules, &starters(&["mud", "air", "fire"]));
        assert!(reached.contains("clay"));
        assert!(reached.contains("pottery"));
    }

    #[test]
    fn test_unreachable_targets() {
        let rules = vec![rule("fire", "water", "steam"), rule("tree", "fire", "campfire")];
        let targets = vec![
            Target {
                name: "campfire".to_string(),
                emoji: String::new(),
                difficulty: Difficulty::Easy,
                recipes: vec![Recipe::new("tree", "fire")],
            },
            Target {
                name: "steam".to_string(),
                emoji: String::new(),
                difficulty: Difficulty::Easy,
                recipes: vec![Recipe::new("fire", "water")],
            },
        ];
        let missing = unreachable_targets(&rules, &targets, &starters(&["fire", "water"]));
        assert_eq!(missing, vec!["campfire".to_string()]);
    }

    #[test]
    fn test_unproduced_elements() {
        let rules = vec![rule("fire", "tree", "campfire")];
        let catalog = vec![
            Element { name: "campfire".into(), emoji: Glyph::Fallback, starter: false, goal: true },
            Element { name: "fire".into(), emoji: Glyph::Fallback, starter: true, goal: false },
            Element { name: "tree".into(), emoji: Glyph::Fallback, starter: false, goal: false },
        ];
        assert_eq!(unproduced_elements(&catalog, &rules), vec!["tree".to_string()]);
    }
}
