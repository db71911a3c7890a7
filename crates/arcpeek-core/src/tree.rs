//! Archive tree container and path indices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::BuildWarning;
use crate::node::{DirectoryNode, FileNode, Node, NodeId};

/// Reconstructed hierarchy for one archive.
///
/// Nodes live in a flat arena and reference each other by [`NodeId`];
/// parents own their children by id, never by back-pointer, so ownership
/// stays acyclic. Built once per archive load and treated as immutable by
/// consumers after the finalize pass; on reload the whole tree is
/// discarded and rebuilt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveTree {
    /// Node arena. [`NodeId`] values index into this.
    pub nodes: Vec<Node>,

    /// Top-level nodes, ordered by the finalize pass.
    pub roots: Vec<NodeId>,

    /// Full path to file node, files only.
    pub file_index: IndexMap<String, NodeId>,

    /// Full path (trailing separator stripped) to directory node,
    /// explicit and implicit directories alike.
    pub directory_index: IndexMap<String, NodeId>,

    /// Entries dropped during construction.
    pub warnings: Vec<BuildWarning>,
}

impl ArchiveTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the arena and return its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(node);
        id
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node by id.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Look up a file by full path.
    pub fn file(&self, path: &str) -> Option<&FileNode> {
        let id = *self.file_index.get(path)?;
        self.node(id).as_file()
    }

    /// Look up a directory by full path (no trailing separator).
    pub fn directory(&self, path: &str) -> Option<&DirectoryNode> {
        let id = *self.directory_index.get(path)?;
        self.node(id).as_directory()
    }

    /// Total number of nodes, implicit directories included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the archive produced no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of raw sizes over the whole archive.
    pub fn total_raw_size(&self) -> u64 {
        self.roots.iter().map(|&id| self.node(id).raw_size()).sum()
    }

    /// Sum of compressed sizes over the whole archive.
    pub fn total_compressed_size(&self) -> u64 {
        self.roots
            .iter()
            .map(|&id| self.node(id).compressed_size())
            .sum()
    }

    /// Whether any entries were dropped during construction.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
