//! charset-probe library
//!
//! Probes a single web page for UTF-8 encoding correctness:
//! - HTTP header charset declaration (HEAD, `Content-Type`)
//! - HTML meta-tag charset declarations (GET, parsed markup)
//! - Round-trip encode/decode of fixed multilingual sample strings
//! - Best-guess statistical detection of the page's byte encoding
//!
//! Each run writes a timestamped JSON report and a timestamped log file.
//! Network faults fail the affected check only; the run always completes.
//!
//! # Example
//!
//! ```no_run
//! use charset_probe::{run_probe, ProbeConfig};
//!
//! let config = ProbeConfig::new("https://example.com/");
//! let report = run_probe(&config).expect("probe failed");
//! println!("header check passed: {}", report.tests.http_headers.success);
//! ```

pub mod checks;
pub mod cli;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod report;
pub mod samples;

use std::path::PathBuf;

use chrono::Local;
use tracing::info;

pub use fetch::PageFetcher;
pub use report::{CheckMessage, CheckResult, DetectionResult, Report, RoundTripCheck, TestSuite};

/// Timestamp captured once at the start of a run.
///
/// Both output filenames and the report's `timestamp` field derive from the
/// same instant, so a run's artifacts always carry matching stamps. Second
/// resolution; two runs starting within the same second will collide.
#[derive(Debug, Clone)]
pub struct RunStamp {
    /// `YYYYMMDD_HHMMSS`, embedded in output filenames
    pub compact: String,
    /// ISO-8601, embedded in the report
    pub iso: String,
}

impl RunStamp {
    pub fn now() -> Self {
        let now = Local::now();
        RunStamp {
            compact: now.format("%Y%m%d_%H%M%S").to_string(),
            iso: now.to_rfc3339(),
        }
    }
}

/// Configuration for a single probe run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Target page URL
    pub url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Directory receiving the log and report files
    pub output_dir: PathBuf,
    /// Run timestamp shared by all artifacts
    pub stamp: RunStamp,
}

impl ProbeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        ProbeConfig {
            url: url.into(),
            timeout_ms: 10_000,
            output_dir: PathBuf::from("."),
            stamp: RunStamp::now(),
        }
    }
}

/// Error types for probe operations.
///
/// Per-check network faults are *not* errors; they are folded into failed
/// check results. Only run-level faults surface here.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Run the full probe against the configured URL.
///
/// Checks execute strictly sequentially, each completing (including its own
/// network fetch) before the next begins. The assembled report is written to
/// `encoding_report_{stamp}.json` under the output directory before being
/// returned. A failed network call fails that check only; the only fatal
/// errors after startup are report serialization and persistence.
pub fn run_probe(config: &ProbeConfig) -> Result<Report, ProbeError> {
    let fetcher = PageFetcher::new(config.timeout_ms)?;

    info!(url = %config.url, "starting encoding probe");
    let tests = checks::run_all(&fetcher, &config.url);

    let report = Report {
        url: config.url.clone(),
        timestamp: config.stamp.iso.clone(),
        tests,
    };

    let path = report::write_report(&report, &config.output_dir, &config.stamp.compact)?;
    info!(path = %path.display(), "report generated");

    Ok(report)
}
