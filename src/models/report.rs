//! Output format and run reports.

use serde::{Deserialize, Serialize};

use super::record::TextRecord;
use super::rva::Rva;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// Machine-parseable JSON format
    Json,
    /// Documentation-friendly Markdown format
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Result of running the sift pipeline over one or more inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiftReport {
    /// Lines read across all inputs.
    pub lines_seen: u64,

    /// Lines dropped by the composition predicate.
    pub lines_filtered: u64,

    /// Retained lines dropped as duplicates of an earlier line.
    pub duplicates_dropped: u64,

    /// Count of retained records. Kept separate from `records` so callers
    /// can drop the record bodies for stats-only output.
    pub retained: u64,

    /// Retained records, in first-seen order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub records: Vec<TextRecord>,

    /// Total run time in milliseconds.
    pub duration_ms: u64,
}

impl SiftReport {
    /// Check if nothing survived the sift.
    pub fn is_empty(&self) -> bool {
        self.retained == 0
    }
}

/// Result of scanning a dump for `set_Text` RVAs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Extracted addresses, deduplicated in first-seen order.
    pub rvas: Vec<Rva>,

    /// Lines inspected in the dump.
    pub lines_scanned: u64,

    /// True when extraction stopped at the configured limit.
    pub truncated: bool,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.rvas.is_empty()
    }
}
