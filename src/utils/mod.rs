//! Utility modules for common functionality
//!
//! Provides reusable file operations for the synchronizers.

pub mod fs;

pub use fs::FileSystemUtils;
