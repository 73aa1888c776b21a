/// Seed Graph v3: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 fingerprint.
///
/// Rules:
///   - Key order is struct field order (version first)
///   - Elements already sorted by name
///   - Pairs and targets in authoring order
///   - UTF-8 JSON, no whitespace, non-ASCII unescaped

use sha2::{Digest, Sha256};

use crate::domain::Document;

/// Canonical serialization of a Document to compact UTF-8 JSON bytes.
pub fn canonical_serialize(doc: &Document) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(doc)
}

/// SHA-256 of the canonical serialization. Lowercase hex.
pub fn canonical_hash(doc: &Document) -> serde_json::Result<String> {
    let bytes = canonical_serialize(doc)?;
    Ok(hex_digest(&bytes))
}

/// Lowercase hex SHA-256 of raw bytes.
pub fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
