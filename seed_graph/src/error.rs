//! Typed failures for input validation and catalog checks.

use thiserror::Error;

/// Which authored record a shape error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Rule,
    Target,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Rule => f.write_str("rule"),
            RecordKind::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No rules to compile.
    #[error("rule table is empty")]
    EmptyRuleTable,

    /// A required identifier field is blank.
    #[error("{record} #{index}: field `{field}` is empty")]
    EmptyIdentifier {
        record: RecordKind,
        index: usize,
        field: &'static str,
    },

    #[error("target {name:?} declares no recipes")]
    TargetWithoutRecipes { name: String },

    /// A recipe pair with a blank member.
    #[error("target {name:?} recipe #{index} has an empty input")]
    MalformedRecipe { name: String, index: usize },

    /// Raised only under the strict recipe policy.
    #[error("target {name:?} recipe [{left:?}, {right:?}] has no matching rule")]
    UnmatchedRecipe {
        name: String,
        left: String,
        right: String,
    },

    /// A compiled catalog broke one of its structural guarantees.
    #[error("catalog check `{check}` failed: {detail}")]
    CatalogViolation { check: &'static str, detail: String },
}

impl GraphError {
    pub fn catalog(check: &'static str, detail: impl Into<String>) -> Self {
        Self::CatalogViolation {
            check,
            detail: detail.into(),
        }
    }
}
