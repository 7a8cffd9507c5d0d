//! Command line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format selection.
#[derive(Debug, Clone, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal summary
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "charset-probe",
    version,
    about = "Probe a web page for UTF-8 encoding correctness"
)]
pub struct Cli {
    /// Target page URL
    pub url: String,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Directory receiving the log and report files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
