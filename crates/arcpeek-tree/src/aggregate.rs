//! Post-order aggregation and deterministic child ordering.

use std::cmp::Ordering;

use arcpeek_core::format::format_size;
use arcpeek_core::{ArchiveTree, Node, NodeId};

/// Compute directory aggregates and put every child list in display
/// order. In place and idempotent: a second call changes nothing.
///
/// Ordering rule: directories before files, then ascending by name,
/// case-insensitive with a byte-order tiebreak. Ties between equal
/// names keep their insertion order (the sort is stable).
///
/// Aggregation is post-order, so a directory's sums are computed only
/// after every descendant's are final. Recursion depth is bounded by
/// the builder's depth limit.
pub fn finalize(tree: &mut ArchiveTree) {
    let mut roots = std::mem::take(&mut tree.roots);
    sort_siblings(tree, &mut roots);
    for &id in &roots {
        aggregate(tree, id);
    }
    tree.roots = roots;
}

/// Sort one child list, then sum sizes bottom-up. Returns the subtree's
/// (raw, compressed) contribution.
fn aggregate(tree: &mut ArchiveTree, id: NodeId) -> (u64, u64) {
    let mut children = match tree.node_mut(id) {
        Node::File(file) => return (file.raw_size, file.compressed_size),
        Node::Directory(dir) => std::mem::take(&mut dir.children),
    };

    sort_siblings(tree, &mut children);

    let mut raw = 0u64;
    let mut compressed = 0u64;
    for &child in &children {
        let (r, c) = aggregate(tree, child);
        raw += r;
        compressed += c;
    }

    if let Node::Directory(dir) = tree.node_mut(id) {
        dir.children = children;
        dir.raw_size = raw;
        dir.compressed_size = compressed;
        dir.raw_size_display = format_size(raw);
        dir.compressed_size_display = format_size(compressed);
    }
    (raw, compressed)
}

fn sort_siblings(tree: &ArchiveTree, ids: &mut [NodeId]) {
    ids.sort_by(|&a, &b| display_order(tree.node(a), tree.node(b)));
}

/// Directories first, then files; within each group ascending by name.
fn display_order(a: &Node, b: &Node) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| compare_names(a.name(), b.name()))
}

/// Case-insensitive name comparison falling back to byte order so that
/// names differing only in case still sort deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeBuilder;
    use arcpeek_core::ArchiveEntry;

    fn built(entries: &[ArchiveEntry]) -> ArchiveTree {
        let mut tree = TreeBuilder::new().build(entries).unwrap();
        finalize(&mut tree);
        tree
    }

    #[test]
    fn test_directories_precede_files() {
        let tree = built(&[
            ArchiveEntry::file("zz.txt", 1, 1, None),
            ArchiveEntry::file("dir/inner.txt", 1, 1, None),
            ArchiveEntry::file("aa.txt", 1, 1, None),
        ]);

        let names: Vec<&str> = tree.roots.iter().map(|&id| tree.node(id).name()).collect();
        assert_eq!(names, ["dir", "aa.txt", "zz.txt"]);
    }

    #[test]
    fn test_name_order_case_insensitive() {
        let tree = built(&[
            ArchiveEntry::file("Beta", 1, 1, None),
            ArchiveEntry::file("alpha", 1, 1, None),
            ArchiveEntry::file("Gamma", 1, 1, None),
        ]);
        let names: Vec<&str> = tree.roots.iter().map(|&id| tree.node(id).name()).collect();
        assert_eq!(names, ["alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_aggregates_sum_nested_files() {
        let tree = built(&[
            ArchiveEntry::file("p/q/r.txt", 5, 2, None),
            ArchiveEntry::file("p/s.txt", 7, 3, None),
        ]);

        let p = tree.directory("p").unwrap();
        assert_eq!(p.raw_size, 12);
        assert_eq!(p.compressed_size, 5);
        let q = tree.directory("p/q").unwrap();
        assert_eq!(q.raw_size, 5);
        assert_eq!(q.compressed_size, 2);
    }

    #[test]
    fn test_directory_display_strings_rendered() {
        let tree = built(&[ArchiveEntry::file("d/f", 2000, 1000, None)]);
        let d = tree.directory("d").unwrap();
        assert_eq!(d.raw_size_display, format_size(2000));
        assert_eq!(d.compressed_size_display, format_size(1000));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut tree = TreeBuilder::new()
            .build(&[
                ArchiveEntry::file("b/x.txt", 4, 2, None),
                ArchiveEntry::file("a.txt", 1, 1, None),
                ArchiveEntry::file("b/a/y.txt", 6, 5, None),
            ])
            .unwrap();
        finalize(&mut tree);
        let first = tree.clone();
        finalize(&mut tree);

        assert_eq!(tree.roots, first.roots);
        for (a, b) in tree.nodes.iter().zip(first.nodes.iter()) {
            assert_eq!(a.raw_size(), b.raw_size());
            assert_eq!(a.path(), b.path());
            if let (Node::Directory(da), Node::Directory(db)) = (a, b) {
                assert_eq!(da.children, db.children);
            }
        }
    }
}
