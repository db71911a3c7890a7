//! Error and diagnostic types for tree construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal conditions during tree construction.
///
/// Malformed individual entries never surface here; they are skipped and
/// reported as [`BuildWarning`]s on the finished tree. A `BuildError`
/// means the whole build is abandoned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A path nests deeper than the configured limit.
    #[error("Path depth exceeds limit ({limit}): {path}")]
    DepthLimitExceeded { path: String, limit: u32 },

    /// More entries than the configured cap.
    #[error("Archive has too many entries ({count}, limit {limit})")]
    TooManyEntries { count: usize, limit: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Structural impossibility in the produced forest.
    #[error("Corrupt entry listing: {message}")]
    Corrupt { message: String },
}

/// Kind of build warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Entry path normalized to nothing usable.
    EmptyPath,
    /// A file entry collided with a path claimed as a directory.
    PathConflict,
    /// Two entries claimed the same path; the later one was dropped.
    DuplicateEntry,
}

/// Non-fatal diagnostic attached to the finished tree.
///
/// One bad record in a large archive should not block previewing the
/// rest, so these entries are dropped and surfaced here instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildWarning {
    /// Entry path the warning refers to, as it appeared in the archive.
    pub path: String,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl BuildWarning {
    /// Create a new build warning.
    pub fn new(path: impl Into<String>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create an empty-path warning.
    pub fn empty_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("Entry path has no usable segments: {path:?}"),
            path,
            kind: WarningKind::EmptyPath,
        }
    }

    /// Create a file/directory conflict warning.
    pub fn path_conflict(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("File entry collides with directory: {path}"),
            path,
            kind: WarningKind::PathConflict,
        }
    }

    /// Create a duplicate-path warning.
    pub fn duplicate_entry(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("Duplicate entry dropped: {path}"),
            path,
            kind: WarningKind::DuplicateEntry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_constructors() {
        let w = BuildWarning::empty_path("/");
        assert_eq!(w.kind, WarningKind::EmptyPath);
        assert!(w.message.contains("usable"));

        let w = BuildWarning::path_conflict("a/b");
        assert_eq!(w.kind, WarningKind::PathConflict);
        assert_eq!(w.path, "a/b");
    }

    #[test]
    fn test_build_error_display() {
        let err = BuildError::DepthLimitExceeded {
            path: "a/b/c".into(),
            limit: 2,
        };
        assert!(err.to_string().contains("a/b/c"));
    }
}
