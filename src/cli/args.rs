//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// metasync - Keeps Python project metadata files consistent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "metasync")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Project root every other path is resolved against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Project configuration file, relative to the root
    #[arg(long, global = true, default_value = "pyproject.toml")]
    pub pyproject: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sync requirements files into the pyproject dependency arrays
    Requirements {
        /// Main requirements file, relative to the root
        #[arg(long, default_value = "requirements.txt")]
        requirements: PathBuf,

        /// Dev/test requirements file, relative to the root
        #[arg(long = "dev-requirements", default_value = "requirements-dev.txt")]
        dev_requirements: PathBuf,
    },

    /// Sync the pyproject version into the package __version__
    Version {
        /// Package initializer holding __version__, relative to the root
        #[arg(long = "init-file", default_value = "src/lango/__init__.py")]
        init_file: PathBuf,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
