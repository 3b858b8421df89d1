//! CLI module for textsift.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::models::OutputFormat;

/// CLI for sifting captured game text before translation extraction.
#[derive(Debug, Parser)]
#[command(name = "textsift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(
        long,
        short = 'f',
        global = true,
        help = "Output format: text, json, or markdown"
    )]
    pub format: Option<OutputFormat>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sift captured text, dropping ASCII-only lines
    Sift(commands::SiftArgs),

    /// Extract set_Text RVAs from an Il2CppDumper dump
    Scan(commands::ScanArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::ConfigCommand),

    /// Show configuration status
    Status,
}

// FromStr for OutputFormat is implemented in models::report
