//! Scan command implementation.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::cli::output::get_formatter;
use crate::error::ScanError;
use crate::models::{Config, OutputFormat};
use crate::services::{DEFAULT_SCAN_LIMIT, DumpScanner};

/// Arguments for the scan command.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Il2CppDumper dump.cs file (use - for stdin)
    pub file: Option<PathBuf>,

    /// Maximum number of RVAs to extract
    #[arg(long, default_value_t = DEFAULT_SCAN_LIMIT)]
    pub limit: usize,

    /// Replace the configured hook RVAs with the scan results
    #[arg(long)]
    pub save: bool,
}

/// Handle the scan command.
pub async fn handle_scan(args: ScanArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let formatter = get_formatter(format);

    if args.limit == 0 {
        return Err(ScanError::InvalidLimit("limit must be at least 1".to_string()).into());
    }

    let input = read_input(args.file.as_deref())?;
    let scanner = DumpScanner::new(args.limit);
    let report = scanner.scan(&input);

    if verbose {
        println!("Scanned {} lines", report.lines_scanned);
    }

    if report.is_empty() {
        println!(
            "{}",
            formatter.format_message("No set_Text RVAs found in the dump.")
        );
        return Ok(());
    }

    if args.save {
        let mut config = Config::load()?;
        config.hook.rvas = report.rvas.clone();
        config.save().context("failed to save config")?;

        println!(
            "{}",
            formatter.format_message(&format!("Saved {} RVAs to config", report.rvas.len()))
        );
    }

    print!("{}", formatter.format_scan_report(&report));

    Ok(())
}

/// Read input from file or stdin.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.to_string_lossy() != "-" => {
            std::fs::read_to_string(path).context("failed to read dump file")
        }
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.cs");
        std::fs::write(&path, "// RVA: 0x10\nvoid set_Text(string s);\n").unwrap();

        let input = read_input(Some(&path)).unwrap();
        assert!(input.contains("set_Text"));
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input(Some(Path::new("/nonexistent/dump.cs"))).is_err());
    }
}
