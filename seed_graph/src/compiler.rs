/// Seed Graph v3: Graph Compiler
///
/// Derives the element catalog from the rule and target tables.
/// Pure function of its inputs. Output order is by identifier bytes.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{CompilerConfig, GlyphTable, RecipePolicy, StarterSet};
use crate::domain::{Element, Glyph, Rule, Target};
use crate::error::GraphError;
use crate::validation;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compile the element catalog.
///
///   1. Visit every rule's `left`, `right`, `result` in table order.
///      Unseen identifiers take their glyph from the glyph table (or the
///      fallback) and `starter` from the starter set. `goal` starts false.
///   2. Visit every target in table order. Its name becomes a goal; a
///      non-empty target glyph overrides whatever step 1 resolved.
///   3. Emit elements ascending by identifier.
///
/// A rule's own `emoji` is never consulted. Recipe pairs never create
/// elements. Missing glyphs are not an error.
pub fn compile(
    rules: &[Rule],
    targets: &[Target],
    glyphs: &GlyphTable,
    starters: &StarterSet,
) -> Vec<Element> {
    // BTreeMap keys order by byte, which is the required output order.
    let mut elements: BTreeMap<String, Element> = BTreeMap::new();

    for rule in rules {
        for name in [&rule.left, &rule.right, &rule.result] {
            if !elements.contains_key(name) {
                elements.insert(
                    name.clone(),
                    Element {
                        name: name.clone(),
                        emoji: resolve_glyph(name, glyphs),
                        starter: starters.contains(name),
                        goal: false,
                    },
                );
            }
        }
    }
    debug!(elements = elements.len(), rules = rules.len(), "rule pass done");

    for target in targets {
        match elements.get_mut(&target.name) {
            Some(existing) => {
                existing.goal = true;
                if !target.emoji.is_empty() {
                    existing.emoji = Glyph::new(target.emoji.as_str());
                }
            }
            None => {
                debug!(name = %target.name, "target introduces a new element");
                let emoji = if target.emoji.is_empty() {
                    resolve_glyph(&target.name, glyphs)
                } else {
                    Glyph::new(target.emoji.as_str())
                };
                elements.insert(
                    target.name.clone(),
                    Element {
                        name: target.name.clone(),
                        emoji,
                        starter: starters.contains(&target.name),
                        goal: true,
                    },
                );
            }
        }
    }

    let catalog: Vec<Element> = elements.into_values().collect();
    debug!(
        elements = catalog.len(),
        fallback = catalog.iter().filter(|e| e.emoji.is_fallback()).count(),
        "catalog compiled"
    );
    catalog
}

/// Validate inputs, compile, apply the recipe policy and re-check the
/// catalog. Nothing is returned unless every step passes.
pub fn build_catalog(
    rules: &[Rule],
    targets: &[Target],
    config: &CompilerConfig,
) -> Result<Vec<Element>, GraphError> {
    validation::check_inputs(rules, targets)?;

    let unmatched = validation::unmatched_recipes(rules, targets);
    if config.recipe_policy == RecipePolicy::Strict {
        if let Some(first) = unmatched.into_iter().next() {
            return Err(first.into_error());
        }
    } else {
        for miss in &unmatched {
            tracing::warn!(
                target_name = %miss.target,
                left = %miss.recipe.left(),
                right = %miss.recipe.right(),
                "recipe has no matching rule"
            );
        }
    }

    let catalog = compile(rules, targets, &config.glyphs, &config.starters);
    validation::try_validate_catalog(&catalog, rules, targets, &config.starters)?;
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// Helpers (private)
// ---------------------------------------------------------------------------

fn resolve_glyph(name: &str, glyphs: &GlyphTable) -> Glyph {
    match glyphs.get(name) {
        Some(g) => Glyph::new(g.as_str()),
        None => Glyph::Fallback,
    }
}
