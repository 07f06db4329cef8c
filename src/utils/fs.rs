//! File system utility functions
//!
//! Provides the read and write-back operations the synchronizers share.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    /// Read file contents, returning `None` when the file does not exist
    #[instrument(skip(self))]
    pub fn read_optional<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<Option<String>> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite `path` with `updated` only if it differs from `original`.
    ///
    /// Returns whether the file was written.
    #[instrument(skip(self, original, updated))]
    pub fn write_if_changed<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        original: &str,
        updated: &str,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        if original == updated {
            debug!("Content unchanged, leaving {} untouched", path.display());
            return Ok(false);
        }

        debug!("Writing file: {}", path.display());
        fs::write(path, updated)?;
        debug!("File written successfully");
        Ok(true)
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
