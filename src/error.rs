//! Error types for the metadata synchronizers
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the synchronizers
#[derive(Error, Debug)]
pub enum SyncError {
    /// A file the command cannot run without does not exist
    #[error("{} not found", .path.display())]
    MissingFile { path: PathBuf },

    /// The configuration document has no `version = "..."` line
    #[error("Could not find version in {}", .path.display())]
    VersionNotFound { path: PathBuf },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SyncError {
    /// Create a new missing file error
    pub fn missing_file<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Create a new version lookup error
    pub fn version_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::VersionNotFound { path: path.into() }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error from a pattern that failed to compile
    pub fn pattern(source: regex::Error) -> Self {
        Self::Config {
            message: "Failed to compile regex".to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SyncError>;
