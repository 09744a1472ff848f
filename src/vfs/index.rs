//! Document index: the flattened `path -> node` lookup table derived from the
//! VFS tree.
//!
//! Built by a single pre-order walk at construction; the VFS never changes
//! afterwards, so the index is computed once and cached for the session.
//! Ordered path lists preserve traversal order, which is the iteration order
//! the search engine relies on.

use std::collections::HashMap;

use crate::vfs::{Node, NodeId, Vfs};

/// Flat lookup table over the VFS.
pub struct DocumentIndex {
    by_path: HashMap<String, NodeId>,
    /// All paths (folders and files) in pre-order.
    paths: Vec<String>,
    /// File paths only, in pre-order.
    file_paths: Vec<String>,
}

impl DocumentIndex {
    /// Walk the tree exactly once and record every node's canonical path.
    pub fn build(vfs: &Vfs) -> Self {
        let mut index = Self {
            by_path: HashMap::new(),
            paths: Vec::new(),
            file_paths: Vec::new(),
        };
        for &root in vfs.roots() {
            index.walk(vfs, root, "");
        }
        index
    }

    fn walk(&mut self, vfs: &Vfs, id: NodeId, base: &str) {
        let node = vfs.node(id);
        let path = if base.is_empty() {
            node.name.clone()
        } else {
            format!("{base}/{}", node.name)
        };
        self.by_path.insert(path.clone(), id);
        self.paths.push(path.clone());
        if node.is_file() {
            self.file_paths.push(path.clone());
        }
        for &child in vfs.children(id) {
            self.walk(vfs, child, &path);
        }
    }

    /// Look up a node id by canonical path.
    pub fn get(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    /// Resolve a path to its node, or `None` if unknown.
    pub fn resolve<'a>(&self, vfs: &'a Vfs, path: &str) -> Option<&'a Node> {
        self.get(path).map(|id| vfs.node(id))
    }

    /// All file paths (folders excluded), in traversal order.
    pub fn all_file_paths(&self) -> &[String] {
        &self.file_paths
    }

    /// All paths including folders, in traversal order.
    pub fn all_paths(&self) -> &[String] {
        &self.paths
    }
}
