/// Seed Graph v3: Validation
///
/// Input-shape checks run before compilation; catalog checks run after.
/// All checks return `Err` on the first failure and never panic.

use std::collections::BTreeSet;

use crate::config::StarterSet;
use crate::domain::{Constraints, Element, Recipe, Rule, Target};
use crate::error::{GraphError, RecordKind};

// ---------------------------------------------------------------------------
// Input shape
// ---------------------------------------------------------------------------

/// Reject empty tables, blank identifiers and recipe-less targets.
pub fn check_inputs(rules: &[Rule], targets: &[Target]) -> Result<(), GraphError> {
    if rules.is_empty() {
        return Err(GraphError::EmptyRuleTable);
    }
    for (index, rule) in rules.iter().enumerate() {
        for (field, value) in [
            ("left", &rule.left),
            ("right", &rule.right),
            ("result", &rule.result),
        ] {
            if value.trim().is_empty() {
                return Err(GraphError::EmptyIdentifier {
                    record: RecordKind::Rule,
                    index,
                    field,
                });
            }
        }
    }
    for (index, target) in targets.iter().enumerate() {
        if target.name.trim().is_empty() {
            return Err(GraphError::EmptyIdentifier {
                record: RecordKind::Target,
                index,
                field: "name",
            });
        }
        if target.recipes.is_empty() {
            return Err(GraphError::TargetWithoutRecipes {
                name: target.name.clone(),
            });
        }
        for (ri, recipe) in target.recipes.iter().enumerate() {
            if recipe.left().trim().is_empty() || recipe.right().trim().is_empty() {
                return Err(GraphError::MalformedRecipe {
                    name: target.name.clone(),
                    index: ri,
                });
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Recipe cross-check
// ---------------------------------------------------------------------------

/// A target recipe with no rule producing the target from that pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedRecipe {
    pub target: String,
    pub recipe: Recipe,
}

impl UnmatchedRecipe {
    pub fn into_error(self) -> GraphError {
        GraphError::UnmatchedRecipe {
            name: self.target,
            left: self.recipe.0,
            right: self.recipe.1,
        }
    }
}

/// Every recipe, in table order, that no rule realizes.
pub fn unmatched_recipes(rules: &[Rule], targets: &[Target]) -> Vec<UnmatchedRecipe> {
    let mut out = Vec::new();
    for target in targets {
        for recipe in &target.recipes {
            if !rules.iter().any(|r| recipe.realized_by(r, &target.name)) {
                out.push(UnmatchedRecipe {
                    target: target.name.clone(),
                    recipe: recipe.clone(),
                });
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Catalog checks
// ---------------------------------------------------------------------------

/// Run every catalog check against the tables it was compiled from.
pub fn try_validate_catalog(
    catalog: &[Element],
    rules: &[Rule],
    targets: &[Target],
    starters: &StarterSet,
) -> Result<(), GraphError> {
    try_check_sorted_unique(catalog)?;
    try_check_completeness(catalog, rules, targets)?;
    try_check_goal_flags(catalog, targets)?;
    try_check_starter_flags(catalog, starters)?;
    Ok(())
}

/// Strictly ascending names imply one element per identifier.
fn try_check_sorted_unique(catalog: &[Element]) -> Result<(), GraphError> {
    for pair in catalog.windows(2) {
        if pair[0].name >= pair[1].name {
            return Err(GraphError::catalog(
                "sorted_unique",
                format!("{:?} is not before {:?}", pair[0].name, pair[1].name),
            ));
        }
    }
    Ok(())
}

/// Catalog names equal the rule identifiers plus the target names.
fn try_check_completeness(
    catalog: &[Element],
    rules: &[Rule],
    targets: &[Target],
) -> Result<(), GraphError> {
    let mut referenced: BTreeSet<&str> = BTreeSet::new();
    for rule in rules {
        referenced.insert(&rule.left);
        referenced.insert(&rule.right);
        referenced.insert(&rule.result);
    }
    for target in targets {
        referenced.insert(&target.name);
    }

    let present: BTreeSet<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    if let Some(missing) = referenced.difference(&present).next() {
        return Err(GraphError::catalog(
            "completeness",
            format!("{:?} is referenced but has no element", missing),
        ));
    }
    if let Some(extra) = present.difference(&referenced).next() {
        return Err(GraphError::catalog(
            "completeness",
            format!("{:?} has an element but is never referenced", extra),
        ));
    }
    Ok(())
}

fn try_check_goal_flags(catalog: &[Element], targets: &[Target]) -> Result<(), GraphError> {
    let goals: BTreeSet<&str> = targets.iter().map(|t| t.name.as_str()).collect();
    for e in catalog {
        if e.goal != goals.contains(e.name.as_str()) {
            return Err(GraphError::catalog(
                "goal_flag",
                format!("{:?} has goal={} but target membership disagrees", e.name, e.goal),
            ));
        }
    }
    Ok(())
}

fn try_check_starter_flags(catalog: &[Element], starters: &StarterSet) -> Result<(), GraphError> {
    for e in catalog {
        if e.starter != starters.contains(&e.name) {
            return Err(GraphError::catalog(
                "starter_flag",
                format!("{:?} has starter={} but starter set disagrees", e.name, e.starter),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Constraint lint
// ---------------------------------------------------------------------------

/// Rule results the downstream engine would refuse. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintFinding {
    TooLong { result: String, len: usize, max: usize },
    Blocklisted { result: String },
}

/// Report each offending result once, in first-seen order.
pub fn lint_constraints(rules: &[Rule], constraints: &Constraints) -> Vec<ConstraintFinding> {
    let blocked: BTreeSet<&str> = constraints
        .blocklist_results
        .iter()
        .map(String::as_str)
        .collect();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut findings = Vec::new();

    for rule in rules {
        if !seen.insert(&rule.result) {
            continue;
        }
        if blocked.contains(rule.result.as_str()) {
            findings.push(ConstraintFinding::Blocklisted {
                result: rule.result.clone(),
            });
        }
        let len = rule.result.chars().count();
        if len > constraints.max_result_len {
            findings.push(ConstraintFinding::TooLong {
                result: rule.result.clone(),
                len,
                max: constraints.max_result_len,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Glyph};

    fn rule(left: &str, right: &str, result: &str) -> Rule {
        Rule {
            left: left.to_string(),
            right: right.to_string(),
            result: result.to_string(),
            emoji: String::new(),
            tags: Vec::new(),
        }
    }

    fn target(name: &str, recipes: &[(&str, &str)]) -> Target {
        Target {
            name: name.to_string(),
            emoji: String::new(),
            difficulty: Difficulty::Medium,
            recipes: recipes.iter().map(|(l, r)| Recipe::new(*l, *r)).collect(),
        }
    }

    fn element(name: &str, starter: bool, goal: bool) -> Element {
        Element {
            name: name.to_string(),
            emoji: Glyph::Fallback,
            starter,
            goal,
        }
    }

    #[test]
    fn test_check_inputs_ok() {
        let rules = vec![rule("a", "b", "c")];
        let targets = vec![target("c", &[("a", "b")])];
        assert!(check_inputs(&rules, &targets).is_ok());
    }

    #[test]
    fn test_check_inputs_blank_rule_field() {
        let rules = vec![rule("a", "b", "c"), rule("a", " ", "d")];
        assert_eq!(
            check_inputs(&rules, &[]),
            Err(GraphError::EmptyIdentifier {
                record: RecordKind::Rule,
                index: 1,
                field: "right",
            })
        );
    }

    #[test]
    fn test_check_inputs_target_shapes() {
        let rules = vec![rule("a", "b", "c")];
        assert_eq!(
            check_inputs(&rules, &[target("", &[("a", "b")])]),
            Err(GraphError::EmptyIdentifier {
                record: RecordKind::Target,
                index: 0,
                field: "name",
            })
        );
        assert_eq!(
            check_inputs(&rules, &[target("c", &[])]),
            Err(GraphError::TargetWithoutRecipes { name: "c".to_string() })
        );
        assert_eq!(
            check_inputs(&rules, &[target("c", &[("a", "b"), ("", "b")])]),
            Err(GraphError::MalformedRecipe { name: "c".to_string(), index: 1 })
        );
    }

    #[test]
    fn test_unmatched_recipes_respects_unordered_pairs() {
        let rules = vec![rule("clay", "fire", "pottery")];
        let targets = vec![target("pottery", &[("fire", "clay"), ("clay", "kiln")])];
        let misses = unmatched_recipes(&rules, &targets);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].recipe, Recipe::new("clay", "kiln"));
    }

    #[test]
    fn test_catalog_rejects_unsorted() {
        let catalog = vec![element("b", false, false), element("a", false, false)];
        let err = try_check_sorted_unique(&catalog).unwrap_err();
        assert!(matches!(err, GraphError::CatalogViolation { check: "sorted_unique", .. }));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let catalog = vec![element("a", false, false), element("a", false, false)];
        assert!(try_check_sorted_unique(&catalog).is_err());
    }

    #[test]
    fn test_catalog_rejects_missing_and_extra() {
        let rules = vec![rule("a", "b", "c")];
        let missing = vec![element("a", false, false), element("b", false, false)];
        assert!(try_check_completeness(&missing, &rules, &[]).is_err());

        let extra = vec![
            element("a", false, false),
            element("b", false, false),
            element("c", false, false),
            element("d", false, false),
        ];
        assert!(try_check_completeness(&extra, &rules, &[]).is_err());
    }

    #[test]
    fn test_catalog_flag_checks() {
        let targets = vec![target("c", &[("a", "b")])];
        let wrong_goal = vec![element("c", false, false)];
        assert!(try_check_goal_flags(&wrong_goal, &targets).is_err());

        let starters: StarterSet = ["a".to_string()].into_iter().collect();
        let wrong_starter = vec![element("a", false, false)];
        assert!(try_check_starter_flags(&wrong_starter, &starters).is_err());
    }

    #[test]
    fn test_lint_constraints() {
        let rules = vec![
            rule("a", "b", "forbidden"),
            rule("b", "a", "forbidden"),
            rule("a", "a", "averyveryverylongname"),
        ];
        let constraints = Constraints {
            blocklist_results: vec!["forbidden".to_string()],
            max_result_len: 10,
        };
        let findings = lint_constraints(&rules, &constraints);
        assert_eq!(
            findings,
            vec![
                ConstraintFinding::Blocklisted { result: "forbidden".to_string() },
                ConstraintFinding::TooLong {
                    result: "averyveryverylongname".to_string(),
                    len: 21,
                    max: 10,
                },
            ]
        );
    }

    #[test]
    fn test_lint_counts_characters_not_bytes() {
        let rules = vec![rule("a", "b", "éé")];
        let constraints = Constraints {
            blocklist_results: Vec::new(),
            max_result_len: 2,
        };
        assert!(lint_constraints(&rules, &constraints).is_empty());
    }
}
