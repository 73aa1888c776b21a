/// Seed Graph v3: Compiler Configuration
///
/// Everything the compiler consults besides the rule and target tables.
/// Passed explicitly; there is no process-wide state.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Constraints, VocabularyEntry};
use crate::tables;

/// Identifier → glyph. May omit entries.
pub type GlyphTable = BTreeMap<String, String>;

/// Identifiers treated as primitives.
pub type StarterSet = BTreeSet<String>;

/// What to do with target recipes that no rule realizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipePolicy {
    /// Report unmatched recipes as warnings and keep going.
    #[default]
    Permissive,
    /// Fail the build on the first unmatched recipe.
    Strict,
}

#[derive(Debug, Clone)]
pub struct CompilerConfig {
    pub glyphs: GlyphTable,
    pub starters: StarterSet,
    pub vocabulary: Vec<VocabularyEntry>,
    pub constraints: Constraints,
    pub recipe_policy: RecipePolicy,
}

impl Default for CompilerConfig {
    /// The authored tables with default constraints.
    fn default() -> Self {
        Self {
            glyphs: tables::authored_glyphs(),
            starters: tables::authored_starters(),
            vocabulary: tables::authored_vocabulary(),
            constraints: Constraints::default(),
            recipe_policy: RecipePolicy::default(),
        }
    }
}

impl CompilerConfig {
    /// Empty glyph table, empty starter set, no vocabulary.
    pub fn bare() -> Self {
        Self {
            glyphs: GlyphTable::new(),
            starters: StarterSet::new(),
            vocabulary: Vec::new(),
            constraints: Constraints::default(),
            recipe_policy: RecipePolicy::Permissive,
        }
    }

    pub fn with_recipe_policy(mut self, policy: RecipePolicy) -> Self {
        self.recipe_policy = policy;
        self
    }

    pub fn with_glyph(mut self, name: &str, glyph: &str) -> Self {
        self.glyphs.insert(name.to_string(), glyph.to_string());
        self
    }

    pub fn with_starters<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.starters.extend(names.into_iter().map(str::to_string));
        self
    }
}
