//! Requirements file synchronization
//!
//! Parses pip-style requirement files and rewrites the matching dependency
//! arrays of `pyproject.toml` in place, without parsing the TOML.

use crate::{
    core::SyncOutcome,
    error::{Result, SyncError},
    utils::fs::FileSystemUtils,
};
use regex::{Captures, Regex};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Indentation used for each rendered array entry
pub const DEFAULT_INDENT: usize = 4;

/// Array label holding the main project dependencies
pub const DEPENDENCIES_LABEL: &str = "dependencies";

/// Array label under `[project.optional-dependencies]` holding dev dependencies
pub const TEST_LABEL: &str = "test";

/// Extract dependency entries from requirements file content.
///
/// Blank lines, `#` comments and `-` flag lines (`-r base.txt`, `-e .`) are
/// dropped. Everything else is kept verbatim, in order, duplicates included.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .filter(|line| !line.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// Render entries as TOML array lines: `    "entry",` joined by newlines.
///
/// An empty list renders as an empty string.
pub fn format_dependencies(deps: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);
    deps.iter()
        .map(|dep| format!("{pad}\"{dep}\","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Synchronizes `requirements*.txt` files into `pyproject.toml`
pub struct RequirementsSync {
    /// Regex for the `dependencies = [ ... ]` array
    re_dependencies: Regex,
    /// Regex for the `test = [ ... ]` array
    re_test: Regex,
    fs_utils: FileSystemUtils,
}

impl RequirementsSync {
    /// Create a new synchronizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_dependencies: array_pattern(DEPENDENCIES_LABEL)?,
            re_test: array_pattern(TEST_LABEL)?,
            fs_utils: FileSystemUtils::new(),
        })
    }

    /// Read and parse a requirements file. A missing file is an empty list.
    #[instrument(skip(self))]
    pub fn read_requirements<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> Result<Vec<String>> {
        let path = path.as_ref();

        let Some(content) = self
            .fs_utils
            .read_optional(path)
            .map_err(|e| SyncError::file_system("read", path, e))?
        else {
            debug!("{} does not exist, treating as empty", path.display());
            return Ok(Vec::new());
        };

        let deps = parse_requirements(&content);
        debug!("Parsed {} entries from {}: {:?}", deps.len(), path.display(), deps);
        Ok(deps)
    }

    /// Rewrite the dependency arrays of `content`.
    ///
    /// Empty lists leave their array untouched, as do labels that are not
    /// present. Only the first occurrence of each label is rewritten.
    pub fn apply(&self, content: &str, deps: &[String], dev_deps: &[String]) -> String {
        let mut updated = content.to_string();

        if !deps.is_empty() {
            let block = format_dependencies(deps, DEFAULT_INDENT);
            updated = replace_array(&self.re_dependencies, &updated, &block);
        }

        if !dev_deps.is_empty() {
            let block = format_dependencies(dev_deps, DEFAULT_INDENT);
            updated = replace_array(&self.re_test, &updated, &block);
        }

        updated
    }

    /// Sync both requirement files into `pyproject`, writing only on change
    #[instrument(skip(self))]
    pub fn sync<P, Q, R>(
        &self,
        pyproject: P,
        requirements: Q,
        dev_requirements: R,
    ) -> Result<SyncOutcome>
    where
        P: AsRef<Path> + std::fmt::Debug,
        Q: AsRef<Path> + std::fmt::Debug,
        R: AsRef<Path> + std::fmt::Debug,
    {
        let pyproject = pyproject.as_ref();

        let content = self
            .fs_utils
            .read_file_to_string(pyproject)
            .map_err(|e| SyncError::file_system("read", pyproject, e))?;

        let deps = self.read_requirements(requirements)?;
        let dev_deps = self.read_requirements(dev_requirements)?;
        info!("Found {} dependencies and {} dev dependencies", deps.len(), dev_deps.len());

        let updated = self.apply(&content, &deps, &dev_deps);

        let written = self
            .fs_utils
            .write_if_changed(pyproject, &content, &updated)
            .map_err(|e| SyncError::file_system("write", pyproject, e))?;

        Ok(SyncOutcome::from(written))
    }
}

/// Build the array matcher for `label`: the opening `label = [`, a newline,
/// the shortest body, and the closing `]` on its own line.
fn array_pattern(label: &str) -> Result<Regex> {
    let pattern = format!(r"(?s)({}\s*=\s*\[)\s*\n(.*?)(\n\s*\])", regex::escape(label));
    Regex::new(&pattern).map_err(SyncError::pattern)
}

fn replace_array(regex: &Regex, content: &str, block: &str) -> String {
    regex
        .replacen(content, 1, |caps: &Captures| format!("{}\n{}\n]", &caps[1], block))
        .into_owned()
}
