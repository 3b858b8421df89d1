//! `set_Text` RVA extraction from Il2CppDumper output.

use std::collections::HashSet;

use regex::Regex;

use crate::models::{Rva, ScanReport};

/// Default cap on extracted RVAs, matching the config bound.
pub const DEFAULT_SCAN_LIMIT: usize = 20;

/// Scans a `dump.cs` for the RVAs of `set_Text` methods.
///
/// Il2CppDumper emits each method as a metadata comment line
/// (`// RVA: 0x... Offset: 0x...`) followed by the method signature line.
/// A hit is a comment carrying an RVA whose next line declares `set_Text`.
#[derive(Debug)]
pub struct DumpScanner {
    set_text: Regex,
    rva: Regex,
    limit: usize,
}

impl DumpScanner {
    pub fn new(limit: usize) -> Self {
        Self {
            // Both patterns are fixed at compile time and known-valid.
            set_text: Regex::new(r"(?i)set_Text\s*\(").expect("static pattern"),
            rva: Regex::new(r"RVA:\s*(0x[0-9a-fA-F]+|\d+)").expect("static pattern"),
            limit,
        }
    }

    /// Extract `set_Text` RVAs from dump content.
    ///
    /// Results are deduplicated in first-seen order and capped at the
    /// configured limit. Comment lines whose RVA fails to parse are skipped.
    pub fn scan(&self, content: &str) -> ScanReport {
        let lines: Vec<&str> = content.lines().collect();
        let mut seen = HashSet::new();
        let mut report = ScanReport {
            lines_scanned: lines.len() as u64,
            ..Default::default()
        };

        for window in lines.windows(2) {
            let (comment, next) = (window[0], window[1]);

            if !self.set_text.is_match(next) {
                continue;
            }
            let Some(captures) = self.rva.captures(comment) else {
                continue;
            };
            let Ok(rva) = captures[1].parse::<Rva>() else {
                continue;
            };

            if !seen.insert(rva) {
                continue;
            }
            report.rvas.push(rva);

            if report.rvas.len() >= self.limit {
                report.truncated = true;
                break;
            }
        }

        report
    }
}

impl Default for DumpScanner {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// Namespace: UnityEngine.UI
public class Text : MaskableGraphic
{
\t// RVA: 0x1d236e8 Offset: 0x1d236e8 VA: 0x71d236e8
\tpublic void set_Text(string value) { }

\t// RVA: 0x1d24000 Offset: 0x1d24000 VA: 0x71d24000
\tpublic string get_Text() { }

\t// RVA: 30560000 Offset: 0x1d25100 VA: 0x71d25100
\tpublic void set_text(string value) { }
}
";

    #[test]
    fn test_scan_extracts_set_text_rvas() {
        let report = DumpScanner::default().scan(SAMPLE);
        assert_eq!(report.rvas, vec![Rva(0x1d236e8), Rva(30560000)]);
        assert!(!report.truncated);
    }

    #[test]
    fn test_scan_ignores_other_methods() {
        let report = DumpScanner::default().scan(SAMPLE);
        assert!(!report.rvas.contains(&Rva(0x1d24000)));
    }

    #[test]
    fn test_scan_is_case_insensitive_on_set_text() {
        let content = "// RVA: 0x10 Offset: 0x10\nvoid SET_TEXT(string s);\n";
        let report = DumpScanner::default().scan(content);
        assert_eq!(report.rvas, vec![Rva(0x10)]);
    }

    #[test]
    fn test_scan_requires_rva_on_preceding_line() {
        let content = "// no address here\nvoid set_Text(string s);\n";
        let report = DumpScanner::default().scan(content);
        assert!(report.is_empty());
        assert_eq!(report.lines_scanned, 2);
    }

    #[test]
    fn test_scan_dedups_repeated_addresses() {
        let content = "\
// RVA: 0x10\nvoid set_Text(string s);\n\
// RVA: 0x10\nvoid set_Text(string s);\n\
// RVA: 0x20\nvoid set_Text(string s);\n";
        let report = DumpScanner::default().scan(content);
        assert_eq!(report.rvas, vec![Rva(0x10), Rva(0x20)]);
    }

    #[test]
    fn test_scan_honors_limit() {
        let mut content = String::new();
        for i in 0..30 {
            content.push_str(&format!("// RVA: 0x{:x}\nvoid set_Text(string s);\n", i + 1));
        }

        let report = DumpScanner::new(5).scan(&content);
        assert_eq!(report.rvas.len(), 5);
        assert!(report.truncated);
    }

    #[test]
    fn test_scan_empty_dump() {
        let report = DumpScanner::default().scan("");
        assert!(report.is_empty());
        assert_eq!(report.lines_scanned, 0);
    }
}
