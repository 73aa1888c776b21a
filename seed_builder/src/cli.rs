//! Command-line surface. Every flag is optional.

use std::path::PathBuf;

use clap::Parser;

use seed_graph::{CompilerConfig, RecipePolicy};

/// Where the document lands when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "src/data/seeds.json";

/// Compile the alchemy combination graph into the seeds document.
#[derive(Debug, Clone, Parser)]
#[command(name = "seed-builder", version, about)]
pub struct Args {
    /// Output path; any existing file is overwritten
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not write; fail if the file at --output is out of date
    #[arg(long)]
    pub check: bool,

    /// Fail when a target recipe has no matching rule
    #[arg(long)]
    pub strict_recipes: bool,

    /// Log filter directive, written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn compiler_config(&self) -> CompilerConfig {
        let policy = if self.strict_recipes {
            RecipePolicy::Strict
        } else {
            RecipePolicy::Permissive
        };
        CompilerConfig::default().with_recipe_policy(policy)
    }
}
