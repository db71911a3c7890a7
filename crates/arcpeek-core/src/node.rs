//! Tree node types.

use chrono::NaiveDateTime;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::format::{format_size, format_timestamp};

/// Unique identifier for a node within a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Index into the owning tree's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a directory node came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirOrigin {
    /// The archive carries a record for this directory.
    Explicit,
    /// Synthesized because some entry's path traverses through it.
    Implicit,
}

/// A file leaf. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    /// Final path segment.
    pub name: CompactString,
    /// Full entry path.
    pub path: String,
    /// Uncompressed size in bytes.
    pub raw_size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Human-readable uncompressed size.
    pub raw_size_display: String,
    /// Human-readable compressed size.
    pub compressed_size_display: String,
    /// Local timestamp string, empty when the archive stored none.
    pub modified_display: String,
}

impl FileNode {
    /// Build a file node, rendering its display strings up front.
    pub fn new(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        raw_size: u64,
        compressed_size: u64,
        modified: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            raw_size,
            compressed_size,
            raw_size_display: format_size(raw_size),
            compressed_size_display: format_size(compressed_size),
            modified_display: format_timestamp(modified),
        }
    }
}

/// A directory. Sizes are aggregates over file descendants, never carried
/// from any single archive record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryNode {
    /// Final path segment.
    pub name: CompactString,
    /// Full path, no trailing separator.
    pub path: String,
    /// Explicit archive record or synthesized path prefix.
    pub origin: DirOrigin,
    /// Modification time from the explicit record, if any.
    pub modified: Option<NaiveDateTime>,
    /// Child nodes, by arena id. Ordered by the finalize pass.
    pub children: Vec<NodeId>,
    /// Recursive sum of descendant file raw sizes.
    pub raw_size: u64,
    /// Recursive sum of descendant file compressed sizes.
    pub compressed_size: u64,
    /// Human-readable aggregate raw size.
    pub raw_size_display: String,
    /// Human-readable aggregate compressed size.
    pub compressed_size_display: String,
}

impl DirectoryNode {
    /// Build an empty directory node. Aggregates and display strings are
    /// filled in by the finalize pass.
    pub fn new(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        origin: DirOrigin,
        modified: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            origin,
            modified,
            children: Vec::new(),
            raw_size: 0,
            compressed_size: 0,
            raw_size_display: String::new(),
            compressed_size_display: String::new(),
        }
    }

    /// Whether this directory was synthesized rather than read.
    pub fn is_implicit(&self) -> bool {
        self.origin == DirOrigin::Implicit
    }
}

/// A single node in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    /// Regular file.
    File(FileNode),
    /// Directory, explicit or implicit.
    Directory(DirectoryNode),
}

impl Node {
    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Node name (final path segment).
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    /// Full entry path.
    pub fn path(&self) -> &str {
        match self {
            Node::File(f) => &f.path,
            Node::Directory(d) => &d.path,
        }
    }

    /// Uncompressed size: stored for files, aggregate for directories.
    pub fn raw_size(&self) -> u64 {
        match self {
            Node::File(f) => f.raw_size,
            Node::Directory(d) => d.raw_size,
        }
    }

    /// Compressed size: stored for files, aggregate for directories.
    pub fn compressed_size(&self) -> u64 {
        match self {
            Node::File(f) => f.compressed_size,
            Node::Directory(d) => d.compressed_size,
        }
    }

    /// Borrow the directory payload, if this is a directory.
    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    /// Borrow the file payload, if this is a file.
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }
}
