//! Error types for the textsift CLI.

use thiserror::Error;

/// Errors related to RVA parsing.
#[derive(Debug, Error)]
pub enum RvaError {
    #[error("empty RVA value")]
    Empty,

    #[error("invalid RVA: {0}")]
    Invalid(String),
}

/// Errors related to configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("path error: {0}")]
    PathError(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Errors related to reading and sifting capture input.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file read error: {0}")]
    FileReadError(String),

    #[error("directory walk error: {0}")]
    WalkError(String),

    #[error("no input files found")]
    NoInput,
}

/// Errors related to dump scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid scan limit: {0}")]
    InvalidLimit(String),
}

/// Application-level errors that wrap domain errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("RVA error: {0}")]
    Rva(#[from] RvaError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Other(String),
}
