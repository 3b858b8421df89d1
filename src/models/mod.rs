mod config;
mod record;
mod report;
mod rva;

pub use config::{Config, DEFAULT_RVA, HookConfig, IngestConfig, MAX_RVAS, OutputConfig};
pub use record::TextRecord;
pub use report::{OutputFormat, ScanReport, SiftReport};
pub use rva::Rva;
