//! Configuration management for the synchronizers
//!
//! Resolves every file the commands touch against one project root, so the
//! core never computes paths on its own.

use crate::{cli::Args, cli::Command, error::SyncError, utils::fs::FileSystemUtils};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root all paths below are relative to
    pub root: PathBuf,
    /// Project configuration document
    pub pyproject: PathBuf,
    /// Main requirements file
    pub requirements: PathBuf,
    /// Dev/test requirements file
    pub dev_requirements: PathBuf,
    /// Package initializer holding `__version__`
    pub init_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            root: PathBuf::from("."),
            pyproject: PathBuf::from("pyproject.toml"),
            requirements: PathBuf::from("requirements.txt"),
            dev_requirements: PathBuf::from("requirements-dev.txt"),
            init_file: PathBuf::from("src/lango/__init__.py"),
        }
    }
}

impl Config {
    /// Create a configuration rooted at `root` with the default file layout
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SyncError> {
        let mut config = Self {
            debug: args.debug,
            root: args.root.clone(),
            pyproject: args.pyproject.clone(),
            ..Self::default()
        };

        // Override with command-specific options
        match &args.command {
            Command::Requirements {
                requirements,
                dev_requirements,
            } => {
                config.requirements = requirements.clone();
                config.dev_requirements = dev_requirements.clone();
            }
            Command::Version { init_file } => {
                config.init_file = init_file.clone();
            }
        }

        config.validate_for(&args.command)?;
        Ok(config)
    }

    /// Check that the files `command` cannot run without exist.
    ///
    /// Requirement files are optional; a missing one reads as empty.
    pub fn validate_for(&self, command: &Command) -> Result<(), SyncError> {
        let fs_utils = FileSystemUtils::new();

        if !self.root.is_dir() {
            return Err(SyncError::config(format!(
                "Project root not found: {}",
                self.root.display()
            )));
        }

        if !fs_utils.is_file(self.pyproject_path()) {
            return Err(SyncError::missing_file(&self.pyproject));
        }

        if let Command::Version { .. } = command {
            if !fs_utils.is_file(self.init_path()) {
                return Err(SyncError::missing_file(&self.init_file));
            }
        }

        Ok(())
    }

    /// Absolute-or-root-relative path of the configuration document
    pub fn pyproject_path(&self) -> PathBuf {
        self.resolve(&self.pyproject)
    }

    /// Path of the main requirements file
    pub fn requirements_path(&self) -> PathBuf {
        self.resolve(&self.requirements)
    }

    /// Path of the dev/test requirements file
    pub fn dev_requirements_path(&self) -> PathBuf {
        self.resolve(&self.dev_requirements)
    }

    /// Path of the package initializer
    pub fn init_path(&self) -> PathBuf {
        self.resolve(&self.init_file)
    }

    /// File name of the configuration document, for status messages
    pub fn pyproject_name(&self) -> String {
        self.pyproject
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.pyproject.display().to_string())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        // join keeps absolute paths as they are
        self.root.join(path)
    }
}
