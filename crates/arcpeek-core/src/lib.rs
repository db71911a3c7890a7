//! Core types for archive tree reconstruction.
//!
//! This crate provides the data model shared across the arcpeek
//! ecosystem: flat archive entries, tree nodes, the arena-backed
//! archive tree with its path indices, build limits, and the display
//! formatting collaborators.

mod config;
mod entry;
mod error;
pub mod format;
mod node;
mod tree;

pub use config::{BuildConfig, BuildConfigBuilder};
pub use entry::{ArchiveEntry, last_segment, parent_of};
pub use error::{BuildError, BuildWarning, WarningKind};
pub use node::{DirOrigin, DirectoryNode, FileNode, Node, NodeId};
pub use tree::ArchiveTree;
