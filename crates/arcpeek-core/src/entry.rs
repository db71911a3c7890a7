//! Flat archive entry records, as produced by an archive reader.

use chrono::NaiveDateTime;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One record from a parsed archive's flat listing.
///
/// The archive reader hands these over in whatever order the container
/// stores them; nothing here implies any hierarchy. `path` is the full
/// forward-slash delimited entry path. Directory entries may carry a
/// trailing `/` in the raw representation; all lookups use the
/// normalized form with the trailing separator stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Whether the record names a directory.
    pub is_directory: bool,

    /// Final path segment.
    pub name: CompactString,

    /// Full entry path, `/`-delimited.
    pub path: String,

    /// Uncompressed size in bytes. Meaningless for directories.
    pub raw_size: u64,

    /// Compressed size in bytes. Meaningless for directories.
    pub compressed_size: u64,

    /// Archive-native modification timestamp, if the container stored one.
    pub modified: Option<NaiveDateTime>,
}

impl ArchiveEntry {
    /// Create a file entry.
    pub fn file(
        path: impl Into<String>,
        raw_size: u64,
        compressed_size: u64,
        modified: Option<NaiveDateTime>,
    ) -> Self {
        let path = path.into();
        Self {
            is_directory: false,
            name: last_segment(&path).into(),
            path,
            raw_size,
            compressed_size,
            modified,
        }
    }

    /// Create a directory entry.
    pub fn directory(path: impl Into<String>, modified: Option<NaiveDateTime>) -> Self {
        let path = path.into();
        Self {
            is_directory: true,
            name: last_segment(path.trim_end_matches('/')).into(),
            path,
            raw_size: 0,
            compressed_size: 0,
            modified,
        }
    }

    /// The logical path: the raw entry path with any trailing separator
    /// stripped. This is the key used by the tree's indices.
    pub fn normalized_path(&self) -> &str {
        self.path.trim_end_matches('/')
    }

    /// The parent path, or `None` when this entry sits at the archive root.
    pub fn parent_path(&self) -> Option<&str> {
        parent_of(self.normalized_path())
    }
}

/// Split a normalized path into its parent prefix, if any.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

/// Final segment of a normalized path. Empty input yields an empty name,
/// as does a doubled slash; callers decide whether to skip such entries.
pub fn last_segment(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_name() {
        let entry = ArchiveEntry::file("docs/readme.md", 120, 64, None);
        assert_eq!(entry.name.as_str(), "readme.md");
        assert_eq!(entry.normalized_path(), "docs/readme.md");
        assert_eq!(entry.parent_path(), Some("docs"));
    }

    #[test]
    fn test_directory_trailing_separator_stripped() {
        let entry = ArchiveEntry::directory("assets/img/", None);
        assert_eq!(entry.name.as_str(), "img");
        assert_eq!(entry.normalized_path(), "assets/img");
        assert_eq!(entry.parent_path(), Some("assets"));
    }

    #[test]
    fn test_root_entry_has_no_parent() {
        let entry = ArchiveEntry::file("top.txt", 1, 1, None);
        assert_eq!(entry.parent_path(), None);
    }

    #[test]
    fn test_doubled_slash_yields_empty_segment() {
        assert_eq!(last_segment("a//"), "");
        assert_eq!(parent_of("a/"), Some("a"));
    }
}
