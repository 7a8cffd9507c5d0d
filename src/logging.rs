//! Per-run log-file setup.
//!
//! The subscriber is constructed explicitly at startup with the run's
//! timestamp and installed as the process-wide dispatcher; its lifecycle is
//! scoped to the single run a process performs. Output is an append-only
//! text file with ANSI disabled.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::ProbeError;

/// Open the run log and install the subscriber.
///
/// The filter honors `RUST_LOG` and defaults to `info`. Returns the log file
/// path for the caller to report.
pub fn init(dir: &Path, stamp: &str) -> Result<PathBuf, ProbeError> {
    let path = dir.join(format!("charset_probe_{}.log", stamp));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ProbeError::Io {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(path)
}
