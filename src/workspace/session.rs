//! Editor session: open tabs, the active document, and folder expansion.
//!
//! Invariants: `open_paths` holds no duplicates, and `active_path` is either
//! `None` or an element of `open_paths`. Callers are expected to pass only
//! resolvable file paths; the workspace facade enforces that.

use std::collections::HashMap;

/// Tab and explorer-expansion state.
#[derive(Debug, Default)]
pub struct EditorSession {
    open_paths: Vec<String>,
    active_path: Option<String>,
    expanded: HashMap<String, bool>,
}

impl EditorSession {
    /// Create a session with the given folder paths expanded by default.
    pub fn new<I, S>(expanded_folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expanded = expanded_folders
            .into_iter()
            .map(|p| (p.into(), true))
            .collect();
        Self {
            open_paths: Vec::new(),
            active_path: None,
            expanded,
        }
    }

    /// Open a tab. Appends the path if it is new, and always activates it.
    pub fn open(&mut self, path: &str) {
        if !self.open_paths.iter().any(|p| p == path) {
            self.open_paths.push(path.to_string());
        }
        self.active_path = Some(path.to_string());
    }

    /// Close a tab.
    ///
    /// When the active tab is closed, the tab immediately to its left becomes
    /// active; if the closed tab was first, the new first tab does; with no
    /// tabs left, no tab is active. Unknown paths are a no-op.
    pub fn close(&mut self, path: &str) {
        let Some(pos) = self.open_paths.iter().position(|p| p == path) else {
            return;
        };
        self.open_paths.remove(pos);
        if self.active_path.as_deref() == Some(path) {
            self.active_path = self
                .open_paths
                .get(pos.saturating_sub(1))
                .cloned();
        }
    }

    /// Activate an already-open tab. Unknown paths are a no-op; activation
    /// never regenerates diagnostics.
    pub fn activate(&mut self, path: &str) {
        if self.open_paths.iter().any(|p| p == path) {
            self.active_path = Some(path.to_string());
        }
    }

    /// Flip a folder's expansion state. Folders default to collapsed unless
    /// seeded expanded at construction.
    pub fn toggle_folder(&mut self, path: &str) {
        let entry = self.expanded.entry(path.to_string()).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    pub fn open_paths(&self) -> &[String] {
        &self.open_paths
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(Vec::<String>::new())
    }

    #[test]
    fn open_appends_and_activates() {
        let mut s = session();
        s.open("a/x.md");
        s.open("a/y.md");
        assert_eq!(s.open_paths(), ["a/x.md", "a/y.md"]);
        assert_eq!(s.active_path(), Some("a/y.md"));
    }

    #[test]
    fn reopen_keeps_order_but_reactivates() {
        let mut s = session();
        s.open("a/x.md");
        s.open("a/y.md");
        s.open("a/x.md");
        assert_eq!(s.open_paths(), ["a/x.md", "a/y.md"]);
        assert_eq!(s.active_path(), Some("a/x.md"));
    }

    #[test]
    fn close_active_activates_left_neighbor() {
        let mut s = session();
        s.open("a");
        s.open("b");
        s.open("c");
        s.close("c");
        assert_eq!(s.open_paths(), ["a", "b"]);
        assert_eq!(s.active_path(), Some("b"));
    }

    #[test]
    fn close_first_active_activates_new_first() {
        let mut s = session();
        s.open("a");
        s.open("b");
        s.activate("a");
        s.close("a");
        assert_eq!(s.active_path(), Some("b"));
    }

    #[test]
    fn close_inactive_keeps_active() {
        let mut s = session();
        s.open("a");
        s.open("b");
        s.open("c");
        s.close("a");
        assert_eq!(s.active_path(), Some("c"));
        assert_eq!(s.open_paths(), ["b", "c"]);
    }

    #[test]
    fn close_last_tab_clears_active() {
        let mut s = session();
        s.open("a");
        s.close("a");
        assert!(s.open_paths().is_empty());
        assert_eq!(s.active_path(), None);
    }

    #[test]
    fn close_unknown_is_noop() {
        let mut s = session();
        s.open("a");
        s.close("zzz");
        assert_eq!(s.open_paths(), ["a"]);
        assert_eq!(s.active_path(), Some("a"));
    }

    #[test]
    fn activate_requires_open_tab() {
        let mut s = session();
        s.open("a");
        s.activate("zzz");
        assert_eq!(s.active_path(), Some("a"));
        s.open("b");
        s.activate("a");
        assert_eq!(s.active_path(), Some("a"));
    }

    #[test]
    fn invariant_holds_under_mixed_sequences() {
        let mut s = session();
        let ops: &[(&str, &str)] = &[
            ("open", "a"),
            ("open", "b"),
            ("close", "a"),
            ("open", "c"),
            ("activate", "b"),
            ("close", "b"),
            ("close", "c"),
            ("close", "c"),
            ("open", "d"),
        ];
        for (op, path) in ops {
            match *op {
                "open" => s.open(path),
                "close" => s.close(path),
                _ => s.activate(path),
            }
            // active is either none or an open tab, and no duplicates exist
            if let Some(active) = s.active_path() {
                assert!(s.open_paths().iter().any(|p| p == active));
            }
            let mut seen = s.open_paths().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), s.open_paths().len());
        }
    }

    #[test]
    fn folders_default_collapsed_unless_seeded() {
        let mut s = EditorSession::new(["portfolio"]);
        assert!(s.is_expanded("portfolio"));
        assert!(!s.is_expanded("projects"));
        s.toggle_folder("projects");
        assert!(s.is_expanded("projects"));
        s.toggle_folder("portfolio");
        assert!(!s.is_expanded("portfolio"));
    }
}
