//! Log file setup
//!
//! Operation summaries go out at info, connection and parser construction at
//! debug. Everything is written to a plain-text log file rather than the
//! terminal so command output stays clean. `RUST_LOG` overrides the filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::ensure_parent_dir;
use crate::error::Result;

const DEFAULT_FILTER: &str = "snippets=debug";

/// Install the global subscriber, appending to `log_file`.
///
/// Must be called once at startup. A second call leaves the first
/// subscriber in place.
pub fn init(log_file: &Path) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_with_filter(log_file, env_filter)
}

fn init_with_filter(log_file: &Path, env_filter: EnvFilter) -> Result<()> {
    ensure_parent_dir(log_file)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
