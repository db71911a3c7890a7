//! Archive entry list to UI-ready tree reconstruction.
//!
//! ZIP-family archive readers produce a flat, unordered listing: each
//! entry carries a full slash-delimited path, a directory flag, and raw
//! and compressed sizes. This crate rebuilds the hierarchy from that
//! listing, synthesizing the directory levels the container never stored,
//! rolls sizes up recursively per directory, and puts every sibling list
//! into a fixed display order, so downstream consumers can key off the
//! produced path indices deterministically.
//!
//! The whole pipeline is synchronous, does no I/O, and takes no locks;
//! running it off the UI thread for large archives is safe as long as the
//! tree is handed over only after [`finalize`] returns.
//!
//! # Example
//!
//! ```rust
//! use arcpeek_tree::{ArchiveEntry, build_and_finalize};
//!
//! let entries = vec![
//!     ArchiveEntry::file("src/main.rs", 4_210, 1_800, None),
//!     ArchiveEntry::file("README.md", 1_024, 600, None),
//! ];
//! let tree = build_and_finalize(&entries).unwrap();
//!
//! // "src" was never stored in the archive, but exists in the tree.
//! assert_eq!(tree.directory("src").unwrap().raw_size, 4_210);
//! assert_eq!(tree.roots.len(), 2);
//! ```

mod aggregate;
mod builder;

pub use aggregate::finalize;
pub use builder::TreeBuilder;

// Re-export core types for convenience
pub use arcpeek_core::{
    ArchiveEntry, ArchiveTree, BuildConfig, BuildError, BuildWarning, DirOrigin, DirectoryNode,
    FileNode, Node, NodeId, WarningKind,
};

/// Build and finalize in one step, with default limits.
pub fn build_and_finalize(entries: &[ArchiveEntry]) -> Result<ArchiveTree, BuildError> {
    let mut tree = TreeBuilder::new().build(entries)?;
    finalize(&mut tree);
    Ok(tree)
}
