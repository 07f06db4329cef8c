//! `__version__` synchronization
//!
//! Reads the project version out of `pyproject.toml` and stamps it onto the
//! `__version__` assignment of the package initializer.

use crate::{
    core::SyncOutcome,
    error::{Result, SyncError},
    utils::fs::FileSystemUtils,
};
use regex::{NoExpand, Regex};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Synchronizes the `pyproject.toml` version into `__init__.py`
pub struct VersionSync {
    /// Regex for `version = "..."` at line start
    re_version: Regex,
    /// Regex for the whole `__version__ = "..."` line, trailing text included
    re_init_version: Regex,
    fs_utils: FileSystemUtils,
}

impl VersionSync {
    /// Create a new synchronizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version: Regex::new(r#"(?m)^version\s*=\s*"([^"]+)""#)
                .map_err(SyncError::pattern)?,
            re_init_version: Regex::new(r#"(?m)^__version__\s*=\s*"[^"]+".*$"#)
                .map_err(SyncError::pattern)?,
            fs_utils: FileSystemUtils::new(),
        })
    }

    /// Find the first `version = "..."` line and return its value
    pub fn extract_version(&self, content: &str) -> Option<String> {
        self.re_version
            .captures(content)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Replace every `__version__` line with the canonical assignment.
    ///
    /// Content without such a line comes back unchanged; the line is never
    /// inserted.
    pub fn apply(&self, content: &str, version: &str) -> String {
        let line = canonical_line(version);
        self.re_init_version
            .replace_all(content, NoExpand(line.as_str()))
            .into_owned()
    }

    /// Sync the version of `pyproject` into `init_file`, writing only on change
    #[instrument(skip(self))]
    pub fn sync<P, Q>(&self, pyproject: P, init_file: Q) -> Result<SyncOutcome>
    where
        P: AsRef<Path> + std::fmt::Debug,
        Q: AsRef<Path> + std::fmt::Debug,
    {
        let pyproject = pyproject.as_ref();
        let init_file = init_file.as_ref();

        let project = self
            .fs_utils
            .read_file_to_string(pyproject)
            .map_err(|e| SyncError::file_system("read", pyproject, e))?;

        let version = self
            .extract_version(&project)
            .ok_or_else(|| SyncError::version_not_found(pyproject))?;
        info!("Project version is {}", version);

        let content = self
            .fs_utils
            .read_file_to_string(init_file)
            .map_err(|e| SyncError::file_system("read", init_file, e))?;

        if !self.re_init_version.is_match(&content) {
            debug!("No __version__ line in {}", init_file.display());
        }
        let updated = self.apply(&content, &version);

        let written = self
            .fs_utils
            .write_if_changed(init_file, &content, &updated)
            .map_err(|e| SyncError::file_system("write", init_file, e))?;

        Ok(SyncOutcome::from(written))
    }
}

fn canonical_line(version: &str) -> String {
    format!("__version__ = \"{version}\"  # modify in pyproject.toml")
}
