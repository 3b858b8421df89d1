//! Core services: composition predicate, sift pipeline, dump scanning.

pub mod dump;
pub mod pipeline;
pub mod sift;

pub use dump::{DEFAULT_SCAN_LIMIT, DumpScanner};
pub use pipeline::SiftPipeline;
pub use sift::{ClassFlags, scan_classes, should_filter, should_filter_bytes};
