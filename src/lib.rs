//! # metasync
//!
//! Maintenance tooling that keeps Python project metadata consistent.
//! Two synchronizers edit files by pattern substitution, leaving every byte
//! outside the matched regions untouched:
//!
//! - requirements: copies `requirements.txt` / `requirements-dev.txt` into the
//!   `dependencies` and `test` arrays of `pyproject.toml`
//! - version: copies `version = "..."` from `pyproject.toml` into the
//!   package's `__version__` line
//!
//! Files are only rewritten when their content actually changes.
//!
//! ## Example
//!
//! ```no_run
//! use metasync::{config::Config, core::VersionSync};
//!
//! let config = Config::with_root(".");
//! let outcome = VersionSync::new()?.sync(config.pyproject_path(), config.init_path())?;
//! println!("changed: {}", outcome.is_changed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout carries only the status line of each command.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
