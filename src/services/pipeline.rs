//! Sift pipeline: composition predicate plus first-seen deduplication.

use std::collections::HashSet;
use std::time::Instant;

use crate::models::{SiftReport, TextRecord};
use crate::services::sift::should_filter;

/// Runs captured lines through the composition predicate and collects the
/// survivors.
///
/// Duplicates are detected by content checksum and dropped while keeping
/// first-seen order, so repeated captures of the same string collapse to one
/// record.
#[derive(Debug)]
pub struct SiftPipeline {
    dedup: bool,
    seen: HashSet<String>,
    report: SiftReport,
    started: Instant,
}

impl SiftPipeline {
    pub fn new(dedup: bool) -> Self {
        Self {
            dedup,
            seen: HashSet::new(),
            report: SiftReport::default(),
            started: Instant::now(),
        }
    }

    /// Feed one captured line into the pipeline.
    pub fn push_line(&mut self, text: &str, source: &str, line: u32) {
        self.report.lines_seen += 1;

        if should_filter(text) {
            self.report.lines_filtered += 1;
            return;
        }

        let record = TextRecord::new(text.to_string(), source, line);

        if self.dedup && !self.seen.insert(record.checksum.clone()) {
            self.report.duplicates_dropped += 1;
            return;
        }

        self.report.records.push(record);
    }

    /// Feed a whole capture file, line by line.
    pub fn push_content(&mut self, content: &str, source: &str) {
        for (i, line) in content.lines().enumerate() {
            self.push_line(line, source, (i + 1) as u32);
        }
    }

    /// Finish the run and take the report.
    pub fn finish(mut self) -> SiftReport {
        self.report.retained = self.report.records.len() as u64;
        self.report.duration_ms = self.started.elapsed().as_millis() as u64;
        self.report
    }
}
