//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{RequirementsSync, SyncOutcome, VersionSync},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Requirements { .. } => execute_requirements_command(config),
        Command::Version { .. } => execute_version_command(config),
    }
}

/// Execute the requirements command
#[instrument(skip(config))]
fn execute_requirements_command(config: &Config) -> anyhow::Result<()> {
    info!(
        "Syncing {} and {} into {}",
        config.requirements.display(),
        config.dev_requirements.display(),
        config.pyproject.display()
    );

    let outcome = RequirementsSync::new()?
        .sync(
            config.pyproject_path(),
            config.requirements_path(),
            config.dev_requirements_path(),
        )
        .context("Failed to sync requirements")?;

    match outcome {
        SyncOutcome::Changed => println!("Synced requirements to {}", config.pyproject_name()),
        SyncOutcome::Unchanged => println!("{} already in sync", config.pyproject_name()),
    }

    Ok(())
}

/// Execute the version command
#[instrument(skip(config))]
fn execute_version_command(config: &Config) -> anyhow::Result<()> {
    info!(
        "Syncing version from {} into {}",
        config.pyproject.display(),
        config.init_file.display()
    );

    let outcome = VersionSync::new()?
        .sync(config.pyproject_path(), config.init_path())
        .context("Failed to sync __version__")?;

    match outcome {
        SyncOutcome::Changed => println!("Synced __version__ from {}", config.pyproject_name()),
        SyncOutcome::Unchanged => println!("__version__ already in sync"),
    }

    Ok(())
}
