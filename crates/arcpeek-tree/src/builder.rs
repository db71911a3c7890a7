//! Two-phase tree reconstruction from a flat entry listing.

use tracing::{debug, warn};

use arcpeek_core::{
    ArchiveEntry, ArchiveTree, BuildConfig, BuildError, BuildWarning, DirOrigin, DirectoryNode,
    FileNode, Node, NodeId, last_segment, parent_of,
};

/// Builds an [`ArchiveTree`] from the unordered entry list of a
/// ZIP-family archive.
///
/// Entries arrive in container order, which guarantees nothing: children
/// may precede their parent directory's own record, and most archives
/// never store records for intermediate directories at all. The builder
/// works in two phases over an arena keyed by path:
///
/// 1. Every input entry is registered and attached to its parent,
///    synthesizing the immediate parent as an implicit directory when no
///    record for it has been seen yet.
/// 2. Directories synthesized in phase 1 are themselves attached upward,
///    synthesizing further ancestors as needed, until only true roots
///    remain unparented. Each step shortens the remaining parent chain,
///    so the pass converges.
///
/// Malformed individual entries are skipped and surfaced as warnings on
/// the tree; only structural limits (depth, entry count) abort the build.
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    /// Create a builder with default limits.
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
        }
    }

    /// Create a builder with explicit limits.
    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Reconstruct the hierarchy for `entries`.
    ///
    /// Never fails on malformed-but-well-typed input; an empty slice
    /// yields an empty tree. The result still needs
    /// [`finalize`](crate::finalize) before consumers may see it.
    pub fn build(&self, entries: &[ArchiveEntry]) -> Result<ArchiveTree, BuildError> {
        if let Some(limit) = self.config.max_entries {
            if entries.len() > limit {
                return Err(BuildError::TooManyEntries {
                    count: entries.len(),
                    limit,
                });
            }
        }

        let mut tree = ArchiveTree::new();
        // Implicit directories created unattached during phase 1; phase 2
        // resolves their own parents.
        let mut pending: Vec<NodeId> = Vec::new();

        for entry in entries {
            self.insert_entry(&mut tree, entry, &mut pending)?;
        }

        // Phase 2: attach synthesized directories upward. New ancestors
        // discovered here are appended to `pending` and processed in the
        // same sweep.
        let mut i = 0;
        while i < pending.len() {
            let id = pending[i];
            i += 1;
            let path = tree.node(id).path().to_string();
            match parent_of(&path) {
                None => tree.roots.push(id),
                Some(parent) => {
                    let pid = resolve_directory(&mut tree, parent, &mut pending);
                    attach_child(&mut tree, pid, id);
                }
            }
        }

        debug!(
            nodes = tree.len(),
            roots = tree.roots.len(),
            warnings = tree.warnings.len(),
            "archive tree built"
        );
        Ok(tree)
    }

    /// Register one input entry (phase 1).
    fn insert_entry(
        &self,
        tree: &mut ArchiveTree,
        entry: &ArchiveEntry,
        pending: &mut Vec<NodeId>,
    ) -> Result<(), BuildError> {
        let path = entry.normalized_path();
        if path.is_empty() {
            // Covers the archive-root marker ("/") as well.
            warn!(raw = %entry.path, "skipping entry with empty path");
            tree.warnings.push(BuildWarning::empty_path(&entry.path));
            return Ok(());
        }

        let depth = path.split('/').count() as u32;
        if depth > self.config.max_depth {
            return Err(BuildError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.config.max_depth,
            });
        }

        if entry.is_directory {
            self.insert_directory(tree, entry, path, pending);
        } else {
            self.insert_file(tree, entry, path, pending);
        }
        Ok(())
    }

    fn insert_directory(
        &self,
        tree: &mut ArchiveTree,
        entry: &ArchiveEntry,
        path: &str,
        pending: &mut Vec<NodeId>,
    ) {
        if let Some(&id) = tree.directory_index.get(path) {
            // Already known, either from an earlier duplicate record or
            // as an implicit prefix of some child's path. An explicit
            // record upgrades the implicit claim and contributes its
            // metadata.
            match tree.node_mut(id) {
                Node::Directory(dir) if dir.is_implicit() => {
                    dir.origin = DirOrigin::Explicit;
                    dir.modified = entry.modified;
                }
                _ => {
                    warn!(%path, "duplicate directory entry dropped");
                    tree.warnings.push(BuildWarning::duplicate_entry(path));
                }
            }
            return;
        }

        if let Some(&id) = tree.file_index.get(path) {
            // A file got here first. The explicit directory claim wins;
            // the file node is rewritten in place so its parent link
            // stays valid, and the lost file is surfaced to the caller.
            warn!(%path, "directory entry displaces earlier file entry");
            tree.warnings.push(BuildWarning::path_conflict(path));
            convert_file_to_directory(tree, path, id);
            if let Node::Directory(dir) = tree.node_mut(id) {
                dir.origin = DirOrigin::Explicit;
                dir.modified = entry.modified;
            }
            return;
        }

        let node = DirectoryNode::new(
            entry.name.clone(),
            path.to_string(),
            DirOrigin::Explicit,
            entry.modified,
        );
        let id = tree.push(Node::Directory(node));
        tree.directory_index.insert(path.to_string(), id);
        self.attach(tree, id, parent_of(path), pending);
    }

    fn insert_file(
        &self,
        tree: &mut ArchiveTree,
        entry: &ArchiveEntry,
        path: &str,
        pending: &mut Vec<NodeId>,
    ) {
        if tree.directory_index.contains_key(path) {
            // Path already claimed as a directory, explicitly or by
            // inference from some other entry. The directory wins.
            warn!(%path, "file entry collides with directory, dropped");
            tree.warnings.push(BuildWarning::path_conflict(path));
            return;
        }
        if tree.file_index.contains_key(path) {
            warn!(%path, "duplicate file entry dropped");
            tree.warnings.push(BuildWarning::duplicate_entry(path));
            return;
        }

        let node = FileNode::new(
            entry.name.clone(),
            path.to_string(),
            entry.raw_size,
            entry.compressed_size,
            entry.modified,
        );
        let id = tree.push(Node::File(node));
        tree.file_index.insert(path.to_string(), id);
        self.attach(tree, id, parent_of(path), pending);
    }

    /// Place a freshly registered node under its parent, or among the
    /// roots when it has none.
    fn attach(
        &self,
        tree: &mut ArchiveTree,
        id: NodeId,
        parent: Option<&str>,
        pending: &mut Vec<NodeId>,
    ) {
        match parent {
            None => tree.roots.push(id),
            Some(parent) => {
                let pid = resolve_directory(tree, parent, pending);
                attach_child(tree, pid, id);
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the directory node for `path`, synthesizing an implicit one when
/// no record has claimed the path yet. A file holding the path loses it:
/// something traverses through the path, so it has to be a directory.
fn resolve_directory(tree: &mut ArchiveTree, path: &str, pending: &mut Vec<NodeId>) -> NodeId {
    if let Some(&id) = tree.directory_index.get(path) {
        return id;
    }
    if let Some(&id) = tree.file_index.get(path) {
        warn!(%path, "file entry displaced by traversing path, dropped");
        tree.warnings.push(BuildWarning::path_conflict(path));
        convert_file_to_directory(tree, path, id);
        return id;
    }

    let node = DirectoryNode::new(
        last_segment(path),
        path.to_string(),
        DirOrigin::Implicit,
        None,
    );
    let id = tree.push(Node::Directory(node));
    tree.directory_index.insert(path.to_string(), id);
    // Unattached for now; phase 2 walks the chain upward.
    pending.push(id);
    id
}

/// Rewrite a file node as an implicit directory, keeping its arena slot
/// so any existing parent link stays valid.
fn convert_file_to_directory(tree: &mut ArchiveTree, path: &str, id: NodeId) {
    tree.file_index.swap_remove(path);
    *tree.node_mut(id) = Node::Directory(DirectoryNode::new(
        last_segment(path),
        path.to_string(),
        DirOrigin::Implicit,
        None,
    ));
    tree.directory_index.insert(path.to_string(), id);
}

fn attach_child(tree: &mut ArchiveTree, parent: NodeId, child: NodeId) {
    match tree.node_mut(parent) {
        Node::Directory(dir) => dir.children.push(child),
        // resolve_directory only ever hands back directories.
        Node::File(_) => unreachable!("parent resolved to a file node"),
    }
}
