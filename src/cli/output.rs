use std::fmt::Write as FmtWrite;

use crate::models::{OutputFormat, ScanReport, SiftReport};

pub trait Formatter {
    fn format_sift_report(&self, report: &SiftReport) -> String;
    fn format_scan_report(&self, report: &ScanReport) -> String;
    fn format_status(&self, status: &StatusInfo) -> String;
    fn format_message(&self, message: &str) -> String;
    fn format_error(&self, error: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub config_path: Option<String>,
    pub config_exists: bool,
    pub rvas: Vec<String>,
    pub dump_mode: bool,
    pub dedup: bool,
    pub default_format: String,
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_sift_report(&self, report: &SiftReport) -> String {
        let mut output = String::new();

        if report.is_empty() {
            writeln!(output, "No text retained.").unwrap();
        } else {
            for (i, record) in report.records.iter().enumerate() {
                writeln!(output, "{}. {}", i + 1, record.text).unwrap();
                writeln!(output, "   Source: {}:{}", record.source, record.line).unwrap();
            }
            writeln!(output).unwrap();
        }

        writeln!(output, "Sift Complete").unwrap();
        writeln!(output, "-------------").unwrap();
        writeln!(output, "Lines seen:     {}", report.lines_seen).unwrap();
        writeln!(output, "Lines filtered: {}", report.lines_filtered).unwrap();
        writeln!(output, "Duplicates:     {}", report.duplicates_dropped).unwrap();
        writeln!(output, "Retained:       {}", report.retained).unwrap();
        writeln!(output, "Duration:       {}ms", report.duration_ms).unwrap();
        output
    }

    fn format_scan_report(&self, report: &ScanReport) -> String {
        if report.is_empty() {
            return format!(
                "No set_Text RVAs found ({} lines scanned).\n",
                report.lines_scanned
            );
        }

        let mut output = String::new();
        writeln!(output, "Found {} set_Text RVAs", report.rvas.len()).unwrap();
        writeln!(output, "----------------------").unwrap();
        for rva in &report.rvas {
            writeln!(output, "  {}", rva).unwrap();
        }
        if report.truncated {
            writeln!(output, "(truncated at limit)").unwrap();
        }
        output
    }

    fn format_status(&self, status: &StatusInfo) -> String {
        let mut output = String::new();
        writeln!(output, "Status").unwrap();
        writeln!(output, "------").unwrap();

        let config_state = if status.config_exists {
            "[SAVED]"
        } else {
            "[DEFAULTS]"
        };
        writeln!(output, "Config:      {}", config_state).unwrap();
        if let Some(ref path) = status.config_path {
            writeln!(output, "  Path:      {}", path).unwrap();
        }

        let mode = if status.dump_mode {
            "dump (metadata only, no text capture)"
        } else {
            "capture (text interception)"
        };
        writeln!(output, "Mode:        {}", mode).unwrap();
        writeln!(output, "Saved RVAs:  {}", status.rvas.len()).unwrap();
        for rva in &status.rvas {
            writeln!(output, "  {}", rva).unwrap();
        }
        writeln!(output, "Dedup:       {}", status.dedup).unwrap();
        writeln!(output, "Format:      {}", status.default_format).unwrap();
        output
    }

    fn format_message(&self, message: &str) -> String {
        format!("{}\n", message)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}\n", error)
    }
}

pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, value: &serde_json::Value) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap()
        } else {
            serde_json::to_string(value).unwrap()
        }
    }
}

impl Formatter for JsonFormatter {
    fn format_sift_report(&self, report: &SiftReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }

    fn format_scan_report(&self, report: &ScanReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }

    fn format_status(&self, status: &StatusInfo) -> String {
        let json = serde_json::json!({
            "config": {
                "path": status.config_path,
                "exists": status.config_exists,
            },
            "hook": {
                "rvas": status.rvas,
                "dump_mode": status.dump_mode,
            },
            "ingest": {
                "dedup": status.dedup,
            },
            "output": {
                "default_format": status.default_format,
            }
        });

        self.render(&json)
    }

    fn format_message(&self, message: &str) -> String {
        serde_json::json!({"message": message}).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({"error": error}).to_string()
    }
}

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format_sift_report(&self, report: &SiftReport) -> String {
        let mut output = String::new();
        writeln!(output, "## Sift Results\n").unwrap();

        if report.is_empty() {
            writeln!(output, "*No text retained.*\n").unwrap();
        } else {
            writeln!(output, "| # | Text | Source |").unwrap();
            writeln!(output, "|---|------|--------|").unwrap();
            for (i, record) in report.records.iter().enumerate() {
                writeln!(
                    output,
                    "| {} | {} | `{}:{}` |",
                    i + 1,
                    record.text,
                    record.source,
                    record.line
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        writeln!(output, "**Lines seen:** {}", report.lines_seen).unwrap();
        writeln!(output, "**Lines filtered:** {}", report.lines_filtered).unwrap();
        writeln!(output, "**Duplicates:** {}", report.duplicates_dropped).unwrap();
        writeln!(output, "**Retained:** {}", report.retained).unwrap();
        writeln!(output, "**Duration:** {}ms", report.duration_ms).unwrap();
        output
    }

    fn format_scan_report(&self, report: &ScanReport) -> String {
        if report.is_empty() {
            return "## Scan Results\n\n*No set_Text RVAs found.*\n".to_string();
        }

        let mut output = String::new();
        writeln!(output, "## Scan Results\n").unwrap();
        writeln!(output, "| RVA |").unwrap();
        writeln!(output, "|-----|").unwrap();
        for rva in &report.rvas {
            writeln!(output, "| `{}` |", rva).unwrap();
        }
        if report.truncated {
            writeln!(output, "\n*Truncated at limit.*").unwrap();
        }
        output
    }

    fn format_status(&self, status: &StatusInfo) -> String {
        let mut output = String::new();
        writeln!(output, "## Status\n").unwrap();

        let config_state = if status.config_exists { "✅" } else { "❌" };
        writeln!(output, "- **Config saved:** {}", config_state).unwrap();
        if let Some(ref path) = status.config_path {
            writeln!(output, "- **Path:** `{}`", path).unwrap();
        }
        let mode = if status.dump_mode { "dump" } else { "capture" };
        writeln!(output, "- **Mode:** {}", mode).unwrap();
        let rvas: Vec<String> = status.rvas.iter().map(|r| format!("`{}`", r)).collect();
        writeln!(output, "- **RVAs:** {}", rvas.join(", ")).unwrap();
        writeln!(output, "- **Dedup:** {}", status.dedup).unwrap();
        writeln!(output, "- **Format:** {}", status.default_format).unwrap();
        output
    }

    fn format_message(&self, message: &str) -> String {
        format!("> {}\n", message)
    }

    fn format_error(&self, error: &str) -> String {
        format!("> ⚠️ **Error:** {}\n", error)
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rva, TextRecord};

    fn sample_report() -> SiftReport {
        SiftReport {
            lines_seen: 3,
            lines_filtered: 2,
            duplicates_dropped: 0,
            retained: 1,
            records: vec![TextRecord::new("討伐完了".to_string(), "capture.txt", 2)],
            duration_ms: 4,
        }
    }

    #[test]
    fn test_text_formatter_sift_report() {
        let output = TextFormatter.format_sift_report(&sample_report());
        assert!(output.contains("討伐完了"));
        assert!(output.contains("capture.txt:2"));
        assert!(output.contains("Lines filtered: 2"));
    }

    #[test]
    fn test_json_formatter_sift_report_parses_back() {
        let output = JsonFormatter::new(false).format_sift_report(&sample_report());
        let parsed: SiftReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.lines_seen, 3);
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn test_scan_report_formatting() {
        let report = ScanReport {
            rvas: vec![Rva(0x1d236e8)],
            lines_scanned: 100,
            truncated: false,
        };

        let text = TextFormatter.format_scan_report(&report);
        assert!(text.contains("0x1d236e8"));

        let md = MarkdownFormatter.format_scan_report(&report);
        assert!(md.contains("`0x1d236e8`"));
    }

    #[test]
    fn test_empty_scan_report_mentions_lines_scanned() {
        let report = ScanReport {
            lines_scanned: 42,
            ..Default::default()
        };
        let text = TextFormatter.format_scan_report(&report);
        assert!(text.contains("42 lines scanned"));
    }
}
