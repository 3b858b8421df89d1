//! Sift command implementation.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::output::get_formatter;
use crate::error::IngestError;
use crate::models::{Config, OutputFormat};
use crate::services::SiftPipeline;
use crate::utils::file::{is_text_file, read_file_content};

/// Arguments for the sift command.
#[derive(Debug, Args)]
pub struct SiftArgs {
    /// Capture files or directories to sift (use - or no path for stdin)
    pub paths: Vec<PathBuf>,

    /// Keep every retained line, including duplicates
    #[arg(long)]
    pub no_dedup: bool,

    /// Write retained text to a file, one line per record
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Report counters only, without the retained records
    #[arg(long)]
    pub stats_only: bool,
}

/// Handle the sift command.
pub async fn handle_sift(args: SiftArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let formatter = get_formatter(format);

    let dedup = config.ingest.dedup && !args.no_dedup;
    let mut pipeline = SiftPipeline::new(dedup);

    if read_from_stdin(&args.paths) {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        pipeline.push_content(&input, "stdin");
    } else {
        let files = collect_files(&args.paths)?;
        if files.is_empty() {
            return Err(IngestError::NoInput.into());
        }

        if verbose {
            println!("Found {} capture files to process", files.len());
        }

        let pb = if files.len() > 1 {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for path in &files {
            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            match read_file_content(path, config.ingest.max_file_size) {
                Ok(content) => pipeline.push_content(&content, &path.to_string_lossy()),
                Err(e) => {
                    if verbose {
                        eprintln!("Skipping {}: {}", path.display(), e);
                    }
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
    }

    let mut report = pipeline.finish();

    if let Some(ref out_path) = args.output {
        let mut retained = String::new();
        for record in &report.records {
            retained.push_str(&record.text);
            retained.push('\n');
        }
        std::fs::write(out_path, retained).context("failed to write output file")?;

        if verbose {
            println!(
                "Wrote {} retained lines to {}",
                report.retained,
                out_path.display()
            );
        }
    }

    if args.stats_only {
        report.records.clear();
    }

    print!("{}", formatter.format_sift_report(&report));

    Ok(())
}

/// Stdin is used when no path is given, or the single path is `-`.
fn read_from_stdin(paths: &[PathBuf]) -> bool {
    match paths {
        [] => true,
        [only] => only.to_string_lossy() == "-",
        _ => false,
    }
}

/// Expand the given paths into a list of readable text files.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(IngestError::FileReadError(format!(
                "path does not exist: {}",
                path.display()
            )));
        }

        for entry in WalkDir::new(path).follow_links(false) {
            let entry = entry.map_err(|e| IngestError::WalkError(e.to_string()))?;
            let entry_path: &Path = entry.path();

            if entry_path.is_file() && is_text_file(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_from_stdin() {
        assert!(read_from_stdin(&[]));
        assert!(read_from_stdin(&[PathBuf::from("-")]));
        assert!(!read_from_stdin(&[PathBuf::from("capture.txt")]));
        assert!(!read_from_stdin(&[
            PathBuf::from("-"),
            PathBuf::from("capture.txt")
        ]));
    }

    #[test]
    fn test_collect_files_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "テキスト\n").unwrap();
        std::fs::write(dir.path().join("b.log"), "ログ\n").unwrap();
        std::fs::write(dir.path().join("c.apk"), [0u8, 1, 2]).unwrap();

        let files = collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_files_missing_path_is_an_error() {
        let result = collect_files(&[PathBuf::from("/nonexistent/capture.txt")]);
        assert!(result.is_err());
    }
}
