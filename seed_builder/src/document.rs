//! Document assembly: compiler output plus pass-through tables.
//!
//! Rules and targets are copied verbatim. Only the element catalog is
//! derived. Reachability and constraint findings are collected here and
//! logged; none of them fail the build.

use tracing::{debug, warn};

use seed_graph::domain::{Constraints, Document, Element, Rule, Target, VocabularyEntry};
use seed_graph::graph::{unproduced_elements, unreachable_targets};
use seed_graph::tables::{authored_rules, authored_targets};
use seed_graph::validation::{lint_constraints, ConstraintFinding};
use seed_graph::{build_catalog, CompilerConfig, GraphError, DOCUMENT_VERSION};

/// A compiled document with the advisory findings gathered on the way.
#[derive(Debug, Clone)]
pub struct Build {
    pub document: Document,
    pub report: BuildReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Targets with no path from the starters.
    pub unreachable_targets: Vec<String>,
    /// Non-starter elements no rule produces.
    pub unproduced_elements: Vec<String>,
    pub constraint_findings: Vec<ConstraintFinding>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.unreachable_targets.is_empty()
            && self.unproduced_elements.is_empty()
            && self.constraint_findings.is_empty()
    }
}

/// Assemble the versioned document. No transformation of the inputs.
pub fn assemble(
    rules: &[Rule],
    catalog: Vec<Element>,
    targets: &[Target],
    vocabulary: &[VocabularyEntry],
    constraints: &Constraints,
) -> Document {
    Document {
        version: DOCUMENT_VERSION,
        pairs: rules.to_vec(),
        elements: catalog,
        targets: targets.to_vec(),
        vocabulary: vocabulary.to_vec(),
        constraints: constraints.clone(),
    }
}

/// Validate, compile and assemble. Fails before anything is written.
pub fn compile_document(
    rules: &[Rule],
    targets: &[Target],
    config: &CompilerConfig,
) -> Result<Build, GraphError> {
    let catalog = build_catalog(rules, targets, config)?;

    let report = BuildReport {
        unreachable_targets: unreachable_targets(rules, targets, &config.starters),
        unproduced_elements: unproduced_elements(&catalog, rules),
        constraint_findings: lint_constraints(rules, &config.constraints),
    };
    log_report(&report);

    let document = assemble(
        rules,
        catalog,
        targets,
        &config.vocabulary,
        &config.constraints,
    );
    debug!(
        pairs = document.pairs.len(),
        elements = document.elements.len(),
        targets = document.targets.len(),
        "document assembled"
    );
    Ok(Build { document, report })
}

/// Compile the authored tables.
pub fn compile_authored(config: &CompilerConfig) -> Result<Build, GraphError> {
    compile_document(&authored_rules(), &authored_targets(), config)
}

/// The line printed after a successful write.
pub fn summary_line(doc: &Document) -> String {
    format!(
        "Wrote {} pairs, {} elements, {} targets",
        doc.pairs.len(),
        doc.elements.len(),
        doc.targets.len()
    )
}

fn log_report(report: &BuildReport) {
    for name in &report.unreachable_targets {
        warn!(name = %name, "target is unreachable from the starters");
    }
    for name in &report.unproduced_elements {
        warn!(name = %name, "element is neither a starter nor produced by any rule");
    }
    for finding in &report.constraint_findings {
        match finding {
            ConstraintFinding::TooLong { result, len, max } => {
                warn!(result = %result, len, max, "result exceeds maxResultLen");
            }
            ConstraintFinding::Blocklisted { result } => {
                warn!(result = %result, "result is blocklisted");
            }
        }
    }
}
