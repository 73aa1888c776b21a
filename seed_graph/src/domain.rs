/// Seed Graph v3: Core Domain Types
///
/// Pure data. No compilation logic.
/// Field order of every struct is the serialized key order.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Placeholder glyph for identifiers with no glyph source.
pub const FALLBACK_GLYPH: &str = "🧩";

// ── Glyph ──────────────────────────────────────────────────────────

/// Display token for an element.
///
/// `Fallback` marks an identifier that neither a target nor the glyph
/// table could resolve. It serializes as [`FALLBACK_GLYPH`], and an
/// authored glyph spelled as that token is the same glyph.
#[derive(Debug, Clone)]
pub enum Glyph {
    Resolved(String),
    Fallback,
}

impl Glyph {
    /// Glyph for an authored token. The fallback token maps to `Fallback`.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token == FALLBACK_GLYPH {
            Glyph::Fallback
        } else {
            Glyph::Resolved(token)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Glyph::Resolved(g) => g,
            Glyph::Fallback => FALLBACK_GLYPH,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Glyph::Fallback)
    }
}

// Equality follows the serialized token.
impl PartialEq for Glyph {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Glyph {}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Glyph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GlyphVisitor;

        impl<'de> Visitor<'de> for GlyphVisitor {
            type Value = Glyph;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a glyph string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Glyph, E> {
                Ok(Glyph::new(v))
            }
        }

        deserializer.deserialize_str(GlyphVisitor)
    }
}

// ── Authored input ─────────────────────────────────────────────────

/// A directed combination edge: `left + right -> result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub left: String,
    pub right: String,
    pub result: String,
    pub emoji: String,     // authored only, never used for the catalog
    pub tags: Vec<String>, // free-form; "target" + "target:<name>"
}

impl Rule {
    /// Combination is unordered: `a + b` matches `b + a`.
    pub fn combines(&self, a: &str, b: &str) -> bool {
        (self.left == a && self.right == b) || (self.left == b && self.right == a)
    }
}

/// Ordered difficulty tier of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One way of producing a target. Serialized as a 2-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe(pub String, pub String);

impl Recipe {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self(left.into(), right.into())
    }

    pub fn left(&self) -> &str {
        &self.0
    }

    pub fn right(&self) -> &str {
        &self.1
    }

    /// True if `rule` produces `result` from this pair (in either order).
    pub fn realized_by(&self, rule: &Rule, result: &str) -> bool {
        rule.result == result && rule.combines(&self.0, &self.1)
    }
}

/// A designated goal element with alternate recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    pub name: String,
    pub emoji: String,
    pub difficulty: Difficulty,
    pub recipes: Vec<Recipe>,
}

/// Alias list for a starter element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyEntry {
    pub name: String,
    pub aliases: Vec<String>,
}

/// Declarative policy consumed by the gameplay engine. Not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Constraints {
    pub blocklist_results: Vec<String>,
    pub max_result_len: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            blocklist_results: Vec::new(),
            max_result_len: 40,
        }
    }
}

// ── Compiled output ────────────────────────────────────────────────

/// A catalog node. Exactly one per distinct identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    pub name: String,
    pub emoji: Glyph,
    pub starter: bool,
    pub goal: bool,
}

/// The complete versioned artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub version: u32,
    pub pairs: Vec<Rule>,
    pub elements: Vec<Element>, // sorted by name
    pub targets: Vec<Target>,
    pub vocabulary: Vec<VocabularyEntry>,
    pub constraints: Constraints,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(left: &str, right: &str, result: &str) -> Rule {
        Rule {
            left: left.to_string(),
            right: right.to_string(),
            result: result.to_string(),
            emoji: String::new(),
            tags: vec!["target".to_string(), format!("target:{}", result)],
        }
    }

    #[test]
    fn test_rule_combines_is_unordered() {
        let r = rule("clay", "fire", "pottery");
        assert!(r.combines("clay", "fire"));
        assert!(r.combines("fire", "clay"));
        assert!(!r.combines("clay", "kiln"));
    }

    #[test]
    fn test_recipe_realized_by() {
        let r = rule("clay", "kiln", "pottery");
        assert!(Recipe::new("kiln", "clay").realized_by(&r, "pottery"));
        assert!(!Recipe::new("kiln", "clay").realized_by(&r, "brick"));
    }

    #[test]
    fn test_difficulty_is_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_glyph_serializes_as_plain_string() {
        let resolved = serde_json::to_string(&Glyph::Resolved("🏺".to_string())).unwrap();
        assert_eq!(resolved, "\"🏺\"");
        let fallback = serde_json::to_string(&Glyph::Fallback).unwrap();
        assert_eq!(fallback, format!("\"{}\"", FALLBACK_GLYPH));
        let back: Glyph = serde_json::from_str(&fallback).unwrap();
        assert!(back.is_fallback());
    }

    #[test]
    fn test_authored_fallback_token_is_the_fallback_glyph() {
        assert!(Glyph::new(FALLBACK_GLYPH).is_fallback());
        assert_eq!(Glyph::Resolved(FALLBACK_GLYPH.to_string()), Glyph::Fallback);
        assert_ne!(Glyph::new("🏺"), Glyph::Fallback);

        let written = serde_json::to_string(&Glyph::new(FALLBACK_GLYPH)).unwrap();
        let back: Glyph = serde_json::from_str(&written).unwrap();
        assert_eq!(back, Glyph::Resolved(FALLBACK_GLYPH.to_string()));
    }

    #[test]
    fn test_constraints_key_names() {
        let json = serde_json::to_string(&Constraints::default()).unwrap();
        assert_eq!(json, r#"{"blocklistResults":[],"maxResultLen":40}"#);
    }

    #[test]
    fn test_rule_missing_field_is_rejected() {
        let err = serde_json::from_str::<Rule>(r#"{"left":"a","right":"b","emoji":"","tags":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `result`"));
    }
}
