//! Records produced by the sift pipeline.

use serde::{Deserialize, Serialize};

/// A retained line of captured text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRecord {
    /// The retained text, exactly as captured.
    pub text: String,

    /// Where the line came from (file path, or `stdin`).
    pub source: String,

    /// 1-based line number within the source.
    pub line: u32,

    /// SHA-256 checksum of the text, also the dedup key.
    pub checksum: String,

    /// When the record was produced (RFC 3339).
    pub captured_at: String,
}

impl TextRecord {
    pub fn new(text: String, source: impl Into<String>, line: u32) -> Self {
        let checksum = crate::utils::file::calculate_checksum(&text);
        Self {
            text,
            source: source.into(),
            line,
            checksum,
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
