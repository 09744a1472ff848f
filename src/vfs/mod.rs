//! Virtual filesystem: an immutable, in-memory folder/file tree seeded at
//! startup.
//!
//! Nodes live in a flat arena (`Vec<Node>`) and reference each other by
//! `NodeId` index, so the tree carries no ownership cycles. A node's identity
//! everywhere else in the crate is its canonical path: the `/`-joined chain
//! of ancestor names with no leading slash (e.g. `portfolio/README.md`).

pub mod index;
pub mod seed;

pub use index::DocumentIndex;
pub use seed::SeedNode;

use crate::error::{AppError, Result};

/// Index of a node inside the [`Vfs`] arena.
pub type NodeId = usize;

/// Payload of a filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder {
        /// Child ids in display order (seed order, not alphabetical).
        children: Vec<NodeId>,
    },
    File {
        /// Extension hint used only for language labels and token styling.
        extension: String,
        content: String,
    },
}

/// A single folder or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File content, or `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content, .. } => Some(content),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Extension hint, or `None` for folders.
    pub fn extension(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { extension, .. } => Some(extension),
            NodeKind::Folder { .. } => None,
        }
    }
}

/// The immutable virtual filesystem tree.
///
/// Constructed once from seed data; no create/delete/rename operations exist.
pub struct Vfs {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Vfs {
    /// Build the arena from seed nodes, validating names as we go.
    ///
    /// Fails on empty names, names containing `/`, or duplicate names within
    /// one folder.
    pub fn from_seed(seed: &[SeedNode]) -> Result<Self> {
        let mut vfs = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        };
        Self::check_sibling_names(seed, "<root>")?;
        for node in seed {
            let id = vfs.insert(node)?;
            vfs.roots.push(id);
        }
        Ok(vfs)
    }

    fn insert(&mut self, seed: &SeedNode) -> Result<NodeId> {
        let name = seed.name();
        if name.is_empty() || name.contains('/') {
            return Err(AppError::Seed(format!("invalid node name {name:?}")));
        }
        match seed {
            SeedNode::File { name, ext, content } => {
                let id = self.nodes.len();
                self.nodes.push(Node {
                    name: name.clone(),
                    kind: NodeKind::File {
                        extension: ext.clone(),
                        content: content.clone(),
                    },
                });
                Ok(id)
            }
            SeedNode::Folder { name, children } => {
                Self::check_sibling_names(children, name)?;
                let mut child_ids = Vec::with_capacity(children.len());
                for child in children {
                    child_ids.push(self.insert(child)?);
                }
                let id = self.nodes.len();
                self.nodes.push(Node {
                    name: name.clone(),
                    kind: NodeKind::Folder {
                        children: child_ids,
                    },
                });
                Ok(id)
            }
        }
    }

    fn check_sibling_names(children: &[SeedNode], parent: &str) -> Result<()> {
        for (i, a) in children.iter().enumerate() {
            if children[..i].iter().any(|b| b.name() == a.name()) {
                return Err(AppError::Seed(format!(
                    "duplicate name {:?} under {parent:?}",
                    a.name()
                )));
            }
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Root node ids in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Child ids of a folder, or an empty slice for files.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id].kind {
            NodeKind::Folder { children } => children,
            NodeKind::File { .. } => &[],
        }
    }
}
