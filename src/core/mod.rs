//! Core synchronization logic
//!
//! Contains the requirements-to-pyproject and pyproject-to-`__version__`
//! synchronizers. Both compute new file content as a pure function of the
//! inputs and only touch the disk on write-back.

pub mod requirements;
pub mod version;

pub use requirements::{RequirementsSync, format_dependencies, parse_requirements};
pub use version::VersionSync;

/// Outcome of a single synchronization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target file was rewritten
    Changed,
    /// The target file already matched and was left untouched
    Unchanged,
}

impl SyncOutcome {
    /// Whether the run rewrote its target file
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl From<bool> for SyncOutcome {
    fn from(written: bool) -> Self {
        if written { Self::Changed } else { Self::Unchanged }
    }
}
