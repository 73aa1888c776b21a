//! Drift detection: determinism verification and artifact comparison.
//!
//! Compares a previously written seeds document against a fresh compile.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use seed_graph::domain::{Document, Element, Rule, Target};
use seed_graph::hashing::{canonical_hash, hex_digest};
use seed_graph::CompilerConfig;

use crate::codec::{decode_document, encode_document, SeedError};
use crate::document::compile_document;

/// Compile the same inputs twice and require byte-identical output.
/// Returns the fingerprint on success.
pub fn verify_determinism(
    rules: &[Rule],
    targets: &[Target],
    config: &CompilerConfig,
) -> Result<String, SeedError> {
    let first = encode_document(&compile_document(rules, targets, config)?.document)?;
    let second_doc = compile_document(rules, targets, config)?.document;
    let second = encode_document(&second_doc)?;

    if first != second {
        return Err(SeedError::NonDeterministic {
            first: hex_digest(first.as_bytes()),
            second: hex_digest(second.as_bytes()),
        });
    }
    fingerprint(&second_doc)
}

/// Element-level comparison of two documents. `a` is the old one.
pub fn compare_documents(a: &Document, b: &Document) -> Result<DriftReport, SeedError> {
    let index_a: BTreeMap<&str, &Element> =
        a.elements.iter().map(|e| (e.name.as_str(), e)).collect();
    let index_b: BTreeMap<&str, &Element> =
        b.elements.iter().map(|e| (e.name.as_str(), e)).collect();

    let added: Vec<String> = index_b
        .keys()
        .filter(|k| !index_a.contains_key(*k))
        .map(|k| k.to_string())
        .collect();
    let removed: Vec<String> = index_a
        .keys()
        .filter(|k| !index_b.contains_key(*k))
        .map(|k| k.to_string())
        .collect();
    let changed: Vec<String> = index_a
        .iter()
        .filter(|(k, ea)| index_b.get(*k).is_some_and(|eb| eb != *ea))
        .map(|(k, _)| k.to_string())
        .collect();

    Ok(DriftReport {
        pair_count_a: a.pairs.len() as i64,
        pair_count_b: b.pairs.len() as i64,
        pair_count_delta: b.pairs.len() as i64 - a.pairs.len() as i64,
        target_count_a: a.targets.len() as i64,
        target_count_b: b.targets.len() as i64,
        target_count_delta: b.targets.len() as i64 - a.targets.len() as i64,
        fingerprint_a: fingerprint(a)?,
        fingerprint_b: fingerprint(b)?,
        added_elements: added,
        removed_elements: removed,
        changed_elements: changed,
        byte_identical: false,
        unreadable: None,
    })
}

/// Compare the artifact at `path` with `fresh`.
///
/// `byte_identical` is set only when the file content equals the encoding
/// of `fresh` exactly, so formatting-only edits count as drift. A file that
/// no longer decodes (old version, unknown fields) is reported as drift too;
/// only a failure to read it is an error.
pub fn check_artifact(path: &Path, fresh: &Document) -> Result<DriftReport, SeedError> {
    let on_disk = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if on_disk == encode_document(fresh)? {
        let mut report = compare_documents(fresh, fresh)?;
        report.byte_identical = true;
        return Ok(report);
    }

    match decode_document(&on_disk) {
        Ok(old) => compare_documents(&old, fresh),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "artifact does not decode");
            DriftReport::unreadable(&on_disk, fresh, err.to_string())
        }
    }
}

/// Structured drift report.
#[derive(Debug, Clone)]
pub struct DriftReport {
    pub pair_count_a: i64,
    pub pair_count_b: i64,
    pub pair_count_delta: i64,
    pub target_count_a: i64,
    pub target_count_b: i64,
    pub target_count_delta: i64,
    pub fingerprint_a: String,
    pub fingerprint_b: String,
    pub added_elements: Vec<String>,
    pub removed_elements: Vec<String>,
    pub changed_elements: Vec<String>,
    pub byte_identical: bool,
    /// Why the old artifact could not be decoded, if it could not.
    pub unreadable: Option<String>,
}

impl DriftReport {
    /// Every element of `fresh` counts as added. `fingerprint_a` is the
    /// digest of the raw file bytes.
    fn unreadable(on_disk: &str, fresh: &Document, reason: String) -> Result<Self, SeedError> {
        Ok(DriftReport {
            pair_count_a: 0,
            pair_count_b: fresh.pairs.len() as i64,
            pair_count_delta: fresh.pairs.len() as i64,
            target_count_a: 0,
            target_count_b: fresh.targets.len() as i64,
            target_count_delta: fresh.targets.len() as i64,
            fingerprint_a: hex_digest(on_disk.as_bytes()),
            fingerprint_b: fingerprint(fresh)?,
            added_elements: fresh.elements.iter().map(|e| e.name.clone()).collect(),
            removed_elements: Vec::new(),
            changed_elements: Vec::new(),
            byte_identical: false,
            unreadable: Some(reason),
        })
    }

    /// Same canonical content, possibly different formatting.
    pub fn same_content(&self) -> bool {
        self.unreadable.is_none() && self.fingerprint_a == self.fingerprint_b
    }

    pub fn summary(&self) -> String {
        if let Some(reason) = &self.unreadable {
            return format!("unreadable artifact: {}", reason);
        }
        format!(
            "pairs {:+}, targets {:+}, elements +{} -{} ~{}",
            self.pair_count_delta,
            self.target_count_delta,
            self.added_elements.len(),
            self.removed_elements.len(),
            self.changed_elements.len()
        )
    }
}

fn fingerprint(doc: &Document) -> Result<String, SeedError> {
    canonical_hash(doc).map_err(|e| SeedError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_graph::domain::Glyph;
    use seed_graph::tables::{authored_rules, authored_targets};

    fn authored() -> Document {
        crate::document::compile_authored(&CompilerConfig::default())
            .unwrap()
            .document
    }

    #[test]
    fn test_verify_determinism_authored() {
        let h = verify_determinism(
            &authored_rules(),
            &authored_targets(),
            &CompilerConfig::default(),
        )
        .unwrap();
        assert_eq!(h.len(), 64);
    }

    #[test]
    fn test_compare_identical() {
        let report = compare_documents(&authored(), &authored()).unwrap();
        assert!(report.same_content());
        assert!(report.added_elements.is_empty());
        assert_eq!(report.summary(), "pairs +0, targets +0, elements +0 -0 ~0");
    }

    #[test]
    fn test_compare_detects_element_changes() {
        let old = authored();
        let mut new = authored();
        new.elements.retain(|e| e.name != "wire");
        new.elements.push(Element {
            name: "zeppelin".to_string(),
            emoji: Glyph::Fallback,
            starter: false,
            goal: false,
        });
        if let Some(steam) = new.elements.iter_mut().find(|e| e.name == "steam") {
            steam.emoji = Glyph::Fallback;
        }
        new.pairs.pop();

        let report = compare_documents(&old, &new).unwrap();
        assert!(!report.same_content());
        assert_eq!(report.added_elements, vec!["zeppelin".to_string()]);
        assert_eq!(report.removed_elements, vec!["wire".to_string()]);
        assert_eq!(report.changed_elements, vec!["steam".to_string()]);
        assert_eq!(report.pair_count_delta, -1);
    }

    #[test]
    fn test_fallback_token_glyph_survives_write_and_read() {
        let rules = vec![Rule {
            left: "a".to_string(),
            right: "b".to_string(),
            result: "c".to_string(),
            emoji: String::new(),
            tags: Vec::new(),
        }];
        let config = CompilerConfig::bare().with_glyph("c", seed_graph::domain::FALLBACK_GLYPH);
        let fresh = compile_document(&rules, &[], &config).unwrap().document;

        let back = decode_document(&encode_document(&fresh).unwrap()).unwrap();
        assert_eq!(back, fresh);
        let report = compare_documents(&back, &fresh).unwrap();
        assert!(report.changed_elements.is_empty());
        assert!(report.same_content());
    }
}
