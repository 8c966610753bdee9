//! Tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so logs only ever go to
//! a file. Without a log file nothing is installed and every `tracing`
//! macro is a no-op.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Open (append, create) the log file.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::Logging {
            path: path.to_path_buf(),
            source,
        })
}

/// Install a global fmt subscriber writing plain text to `path`.
///
/// The level filter comes from `RUST_LOG`, defaulting to `info`. A second
/// call is ignored.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
