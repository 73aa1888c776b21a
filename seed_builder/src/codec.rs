//! Seeds Codec: Document encoder/decoder and file I/O.
//!
//! - `encode_document`: Document → pretty JSON (2-space indent, trailing newline)
//! - `decode_document`: JSON → Document (strict, version-checked)
//! - `write_document` / `read_document`: file I/O, full overwrite on write

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use seed_graph::domain::Document;
use seed_graph::{GraphError, DOCUMENT_VERSION};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible build and codec failures.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Input tables or the compiled catalog were rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Malformed JSON, missing fields or unknown fields.
    #[error("malformed seeds document: {0}")]
    Deserialization(String),

    #[error("unsupported document version {found} (expected {expected})")]
    VersionMismatch { found: u64, expected: u32 },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two compiles of the same inputs disagreed.
    #[error("determinism failure: {first} != {second}")]
    NonDeterministic { first: String, second: String },
}

impl SeedError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> SeedError + '_ {
        move |source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encode a Document as human-diffable JSON.
///
/// Non-ASCII glyphs are written as-is. Output ends with a newline.
pub fn encode_document(doc: &Document) -> Result<String, SeedError> {
    let mut text = serde_json::to_string_pretty(doc)
        .map_err(|e| SeedError::Serialization(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Decode a JSON string into a Document.
///
/// The version is checked first so an old artifact reports a version
/// mismatch rather than a field error. Unknown and missing fields fail.
pub fn decode_document(json: &str) -> Result<Document, SeedError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SeedError::Deserialization(e.to_string()))?;

    let found = value
        .get("version")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| SeedError::Deserialization("missing integer `version`".to_string()))?;
    if found != DOCUMENT_VERSION as u64 {
        return Err(SeedError::VersionMismatch {
            found,
            expected: DOCUMENT_VERSION,
        });
    }

    serde_json::from_value(value).map_err(|e| SeedError::Deserialization(e.to_string()))
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Write the Document to `path`, replacing any previous content.
///
/// Creates parent directories if needed. Encoding happens before the file
/// is opened, so a serialization failure leaves the old file untouched.
pub fn write_document(doc: &Document, path: &Path) -> Result<(), SeedError> {
    let text = encode_document(doc)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(SeedError::io(parent))?;
        }
    }

    let mut file = File::create(path).map_err(SeedError::io(path))?;
    file.write_all(text.as_bytes()).map_err(SeedError::io(path))?;
    file.sync_all().map_err(SeedError::io(path))?;

    info!(path = %path.display(), bytes = text.len(), "seeds document written");
    Ok(())
}

pub fn read_document(path: &Path) -> Result<Document, SeedError> {
    let content = fs::read_to_string(path).map_err(SeedError::io(path))?;
    decode_document(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_graph::domain::{Constraints, Element, Glyph};

    fn small_doc() -> Document {
        Document {
            version: DOCUMENT_VERSION,
            pairs: Vec::new(),
            elements: vec![Element {
                name: "fire".to_string(),
                emoji: Glyph::Resolved("🔥".to_string()),
                starter: true,
                goal: false,
            }],
            targets: Vec::new(),
            vocabulary: Vec::new(),
            constraints: Constraints::default(),
        }
    }

    #[test]
    fn test_encode_is_pretty_with_trailing_newline() {
        let text = encode_document(&small_doc()).unwrap();
        assert!(text.starts_with("{\n  \"version\": 3,\n  \"pairs\": [],\n"));
        assert!(text.contains("\"emoji\": \"🔥\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_decode_round_trip() {
        let doc = small_doc();
        let back = decode_document(&encode_document(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_decode_version_mismatch() {
        let text = encode_document(&small_doc()).unwrap().replace("\"version\": 3", "\"version\": 2");
        match decode_document(&text) {
            Err(SeedError::VersionMismatch { found: 2, expected: 3 }) => {}
            other => panic!("expected version mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_unknown_field() {
        let text = encode_document(&small_doc())
            .unwrap()
            .replace("\"starter\": true", "\"starter\": true,\n      \"rare\": true");
        assert!(matches!(decode_document(&text), Err(SeedError::Deserialization(_))));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let text = r#"{"version":3,"pairs":[],"elements":[],"targets":[],"vocabulary":[]}"#;
        match decode_document(text) {
            Err(SeedError::Deserialization(msg)) => assert!(msg.contains("constraints")),
            other => panic!("expected deserialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_missing_version() {
        assert!(matches!(decode_document("{}"), Err(SeedError::Deserialization(_))));
    }
}
