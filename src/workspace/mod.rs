//! Workspace facade tying the VFS, editor session, and diagnostics together.
//!
//! Every user-visible state transition goes through here: opening a file is
//! guarded against unresolvable paths and triggers diagnostics regeneration,
//! problem selection opens the file and records a line highlight, and the
//! explorer row list is derived from the tree plus the expansion map.

pub mod diagnostics;
pub mod session;

pub use diagnostics::{Diagnostic, DiagnosticsState, Severity};
pub use session::EditorSession;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::search::{self, SearchHit};
use crate::vfs::{DocumentIndex, Node, Vfs};

/// A line to visually focus in the editor, set by clicking a problem entry.
/// Not part of the diagnostics data model; replaced on every jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub path: String,
    pub line: usize,
}

/// One visible row of the explorer tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRow {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub is_folder: bool,
    pub is_expanded: bool,
}

/// The IDE simulator's mutable core.
pub struct Workspace {
    vfs: Vfs,
    index: DocumentIndex,
    pub session: EditorSession,
    pub diagnostics: DiagnosticsState,
    pub highlight: Option<Highlight>,
    rng: StdRng,
}

impl Workspace {
    /// Build a workspace over the given tree with an entropy-seeded RNG.
    pub fn new(vfs: Vfs, session: EditorSession) -> Self {
        Self::with_rng(vfs, session, StdRng::from_entropy())
    }

    /// Build a workspace with a caller-supplied RNG (deterministic in tests).
    pub fn with_rng(vfs: Vfs, session: EditorSession, rng: StdRng) -> Self {
        let index = DocumentIndex::build(&vfs);
        Self {
            vfs,
            index,
            session,
            diagnostics: DiagnosticsState::default(),
            highlight: None,
            rng,
        }
    }

    /// Open a file tab and regenerate diagnostics for it.
    ///
    /// Returns `false` without touching any state when the path does not
    /// resolve to a file; a folder or unknown path never creates a tab.
    pub fn open_file(&mut self, path: &str) -> bool {
        match self.index.resolve(&self.vfs, path) {
            Some(node) if node.is_file() => {}
            _ => {
                debug!(path, "ignoring open of unresolvable path");
                return false;
            }
        }
        self.session.open(path);
        self.diagnostics.regenerate(path, &mut self.rng);
        true
    }

    /// Close a tab. Unknown paths are a no-op.
    pub fn close_file(&mut self, path: &str) {
        self.session.close(path);
    }

    /// Activate an already-open tab without regenerating diagnostics.
    pub fn activate_file(&mut self, path: &str) {
        self.session.activate(path);
    }

    /// Open the file behind the problem at `idx` and highlight its line.
    pub fn jump_to_problem(&mut self, idx: usize) {
        let Some(problem) = self.diagnostics.problems().get(idx) else {
            return;
        };
        let (path, line) = (problem.file.clone(), problem.line);
        if self.open_file(&path) {
            self.highlight = Some(Highlight { path, line });
        }
    }

    pub fn resolve(&self, path: &str) -> Option<&Node> {
        self.index.resolve(&self.vfs, path)
    }

    /// Content of the active file, if any.
    pub fn active_content(&self) -> Option<&str> {
        self.session
            .active_path()
            .and_then(|p| self.resolve(p))
            .and_then(|n| n.content())
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        search::search(query, &self.vfs, &self.index)
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    /// Flatten the tree into the rows currently visible in the explorer,
    /// honoring the session's folder-expansion map.
    pub fn explorer_rows(&self) -> Vec<ExplorerRow> {
        let mut rows = Vec::new();
        for &root in self.vfs.roots() {
            self.push_rows(root, "", 0, &mut rows);
        }
        rows
    }

    fn push_rows(
        &self,
        id: crate::vfs::NodeId,
        base: &str,
        depth: usize,
        rows: &mut Vec<ExplorerRow>,
    ) {
        let node = self.vfs.node(id);
        let path = if base.is_empty() {
            node.name.clone()
        } else {
            format!("{base}/{}", node.name)
        };
        let is_folder = !node.is_file();
        let is_expanded = is_folder && self.session.is_expanded(&path);
        rows.push(ExplorerRow {
            path: path.clone(),
            name: node.name.clone(),
            depth,
            is_folder,
            is_expanded,
        });
        if is_expanded {
            for &child in self.vfs.children(id) {
                self.push_rows(child, &path, depth + 1, rows);
            }
        }
    }
}
