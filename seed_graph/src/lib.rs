#![forbid(unsafe_code)]

/// Seed document format version. Bump when the artifact layout changes.
pub const DOCUMENT_VERSION: u32 = 3;

pub mod domain;
pub mod error;
pub mod config;
pub mod tables;
pub mod compiler;
pub mod validation;
pub mod graph;
pub mod hashing;

pub use compiler::{build_catalog, compile};
pub use config::{CompilerConfig, GlyphTable, RecipePolicy, StarterSet};
pub use domain::{Document, Element, Glyph, Rule, Target};
pub use error::GraphError;
