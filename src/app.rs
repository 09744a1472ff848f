//! Main application state: the workspace core, the simulated terminal, the
//! sidebar views, focus, and the clock. All mutation happens synchronously
//! from the event loop; derived data (search results, status line, explorer
//! rows) is recomputed on demand.

use chrono::{DateTime, Local};

use crate::config::{AppConfig, ContentPaths};
use crate::error::Result;
use crate::search::SearchHit;
use crate::shell::{ExternalActions, LoggedActions, TerminalState};
use crate::status::{self, StatusInfo};
use crate::theme::ThemeColors;
use crate::vfs::{SeedNode, Vfs};
use crate::workspace::{EditorSession, Workspace};

/// Which panel the sidebar currently shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SidebarView {
    #[default]
    Explorer,
    Search,
    Problems,
}

/// Which panel receives keystrokes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Sidebar,
    Editor,
    Terminal,
}

/// Main application state.
pub struct App {
    pub workspace: Workspace,
    pub terminal: TerminalState,
    pub content: ContentPaths,
    pub external: Box<dyn ExternalActions>,
    pub theme: ThemeColors,

    pub sidebar: SidebarView,
    pub focus: Focus,
    pub explorer_selected: usize,
    pub search_query: String,
    pub search_results: Vec<SearchHit>,
    pub search_selected: usize,
    pub problems_selected: usize,

    /// 1-based editor cursor (line, col).
    pub cursor: (usize, usize),
    pub editor_scroll: usize,

    pub now: DateTime<Local>,
    pub should_quit: bool,
}

impl App {
    /// Build the app from config, seed data, and a resolved theme.
    pub fn new(config: &AppConfig, seed: &[SeedNode], theme: ThemeColors) -> Result<Self> {
        let vfs = Vfs::from_seed(seed)?;

        // Default-expanded folders: config list, else every root folder.
        let expanded = match &config.workspace.expanded_folders {
            Some(folders) => folders.clone(),
            None => vfs
                .roots()
                .iter()
                .map(|&id| vfs.node(id).name.clone())
                .collect(),
        };

        let session = EditorSession::new(expanded);
        let mut workspace = Workspace::new(vfs, session);

        let open_files = config
            .workspace
            .open_files
            .clone()
            .unwrap_or_else(|| vec!["portfolio/README.md".to_string()]);
        for path in &open_files {
            workspace.open_file(path);
        }

        Ok(Self {
            workspace,
            terminal: TerminalState::new(),
            content: config.content_paths(),
            external: Box::new(LoggedActions),
            theme,
            sidebar: SidebarView::default(),
            focus: Focus::default(),
            explorer_selected: 0,
            search_query: String::new(),
            search_results: Vec::new(),
            search_selected: 0,
            problems_selected: 0,
            cursor: (1, 1),
            editor_scroll: 0,
            now: Local::now(),
            should_quit: false,
        })
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the wall clock (tick event).
    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    /// Compose the current status line.
    pub fn status(&self) -> StatusInfo {
        status::compose(
            &self.workspace.session,
            &self.workspace.diagnostics,
            self.cursor,
            self.now,
        )
    }

    /// Switch the sidebar view and move focus there.
    pub fn show_sidebar(&mut self, view: SidebarView) {
        self.sidebar = view;
        self.focus = Focus::Sidebar;
    }

    // ── Explorer ─────────────────────────────────────────────────────────────

    pub fn explorer_next(&mut self) {
        let len = self.workspace.explorer_rows().len();
        if len > 0 && self.explorer_selected < len - 1 {
            self.explorer_selected += 1;
        }
    }

    pub fn explorer_previous(&mut self) {
        if self.explorer_selected > 0 {
            self.explorer_selected -= 1;
        }
    }

    /// Toggle the selected folder or open the selected file.
    pub fn explorer_activate(&mut self) {
        let rows = self.workspace.explorer_rows();
        let Some(row) = rows.get(self.explorer_selected) else {
            return;
        };
        if row.is_folder {
            self.workspace.session.toggle_folder(&row.path);
            // Collapsing can shrink the row list; keep the selection valid.
            let len = self.workspace.explorer_rows().len();
            if self.explorer_selected >= len && len > 0 {
                self.explorer_selected = len - 1;
            }
        } else {
            let path = row.path.clone();
            self.open_file(&path);
        }
    }

    // ── Tabs / editor ────────────────────────────────────────────────────────

    /// Open a file, resetting the cursor and scroll for the new document.
    pub fn open_file(&mut self, path: &str) -> bool {
        let opened = self.workspace.open_file(path);
        if opened {
            self.cursor = (1, 1);
            self.editor_scroll = 0;
        }
        opened
    }

    /// Close the active tab, if any.
    pub fn close_active_tab(&mut self) {
        if let Some(active) = self.workspace.session.active_path().map(String::from) {
            self.workspace.close_file(&active);
            self.cursor = (1, 1);
            self.editor_scroll = 0;
        }
    }

    /// Activate the tab after (offset 1) or before (offset -1) the active one.
    pub fn cycle_tab(&mut self, offset: isize) {
        let open = self.workspace.session.open_paths();
        if open.is_empty() {
            return;
        }
        let current = self
            .workspace
            .session
            .active_path()
            .and_then(|a| open.iter().position(|p| p == a))
            .unwrap_or(0);
        let len = open.len() as isize;
        let next = (current as isize + offset).rem_euclid(len) as usize;
        let path = open[next].clone();
        self.workspace.activate_file(&path);
        self.cursor = (1, 1);
        self.editor_scroll = 0;
    }

    /// Move the editor cursor, clamped to the active document's lines.
    pub fn move_cursor(&mut self, dl: isize, dc: isize) {
        let Some(content) = self.workspace.active_content() else {
            return;
        };
        let lines: Vec<&str> = content.split('\n').collect();
        let max_line = lines.len().max(1);
        let line = (self.cursor.0 as isize + dl).clamp(1, max_line as isize) as usize;
        let line_len = lines.get(line - 1).map(|l| l.chars().count()).unwrap_or(0);
        let col = (self.cursor.1 as isize + dc).clamp(1, line_len as isize + 1) as usize;
        self.cursor = (line, col);
    }

    // ── Search ───────────────────────────────────────────────────────────────

    /// Replace the query and recompute results synchronously.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.search_results = self.workspace.search(&self.search_query);
        self.search_selected = 0;
    }

    pub fn search_push(&mut self, c: char) {
        let mut q = self.search_query.clone();
        q.push(c);
        self.set_search_query(q);
    }

    pub fn search_pop(&mut self) {
        let mut q = self.search_query.clone();
        q.pop();
        self.set_search_query(q);
    }

    pub fn search_next(&mut self) {
        if !self.search_results.is_empty()
            && self.search_selected < self.search_results.len() - 1
        {
            self.search_selected += 1;
        }
    }

    pub fn search_previous(&mut self) {
        if self.search_selected > 0 {
            self.search_selected -= 1;
        }
    }

    /// Open the selected search result.
    pub fn search_activate(&mut self) {
        if let Some(hit) = self.search_results.get(self.search_selected) {
            let path = hit.path.clone();
            self.open_file(&path);
            self.focus = Focus::Editor;
        }
    }

    // ── Problems ─────────────────────────────────────────────────────────────

    pub fn problems_next(&mut self) {
        let len = self.workspace.diagnostics.problems().len();
        if len > 0 && self.problems_selected < len - 1 {
            self.problems_selected += 1;
        }
    }

    pub fn problems_previous(&mut self) {
        if self.problems_selected > 0 {
            self.problems_selected -= 1;
        }
    }

    /// Open the selected problem's file and move the cursor to its line.
    pub fn problems_activate(&mut self) {
        self.workspace.jump_to_problem(self.problems_selected);
        if let Some(h) = &self.workspace.highlight {
            self.cursor = (h.line, 1);
            self.focus = Focus::Editor;
        }
        self.problems_selected = 0;
    }

    // ── Terminal ─────────────────────────────────────────────────────────────

    pub fn terminal_input(&mut self, c: char) {
        self.terminal.input.push(c);
    }

    pub fn terminal_backspace(&mut self) {
        self.terminal.input.pop();
    }

    /// Submit the terminal input line to the interpreter.
    pub fn terminal_submit(&mut self) {
        self.terminal
            .submit(&mut self.workspace, &self.content, self.external.as_mut());
        self.cursor = (1, 1);
        self.editor_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use crate::vfs::seed::default_seed;

    fn app() -> App {
        App::new(
            &AppConfig::default(),
            &default_seed(),
            theme::dark_theme(),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_readme_open() {
        let app = app();
        assert_eq!(app.workspace.session.open_paths(), ["portfolio/README.md"]);
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/README.md")
        );
    }

    #[test]
    fn config_controls_startup_tabs() {
        let config: AppConfig = toml::from_str(
            r#"
            [workspace]
            open_files = ["portfolio/about.java", "education/mca.md"]
            expanded_folders = ["education"]
            "#,
        )
        .unwrap();
        let app = App::new(&config, &default_seed(), theme::dark_theme()).unwrap();
        assert_eq!(
            app.workspace.session.open_paths(),
            ["portfolio/about.java", "education/mca.md"]
        );
        assert_eq!(app.workspace.session.active_path(), Some("education/mca.md"));
        assert!(app.workspace.session.is_expanded("education"));
        assert!(!app.workspace.session.is_expanded("portfolio"));
    }

    #[test]
    fn explorer_selection_clamps() {
        let mut app = app();
        app.explorer_previous();
        assert_eq!(app.explorer_selected, 0);
        let len = app.workspace.explorer_rows().len();
        for _ in 0..len + 10 {
            app.explorer_next();
        }
        assert_eq!(app.explorer_selected, len - 1);
    }

    #[test]
    fn explorer_activate_opens_file() {
        let mut app = app();
        let rows = app.workspace.explorer_rows();
        let idx = rows
            .iter()
            .position(|r| r.path == "portfolio/about.java")
            .unwrap();
        app.explorer_selected = idx;
        app.explorer_activate();
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/about.java")
        );
    }

    #[test]
    fn explorer_activate_toggles_folder_and_keeps_selection_valid() {
        let mut app = app();
        let rows = app.workspace.explorer_rows();
        let before = rows.len();
        // select "portfolio" (expanded by default) and collapse it
        let idx = rows.iter().position(|r| r.path == "portfolio").unwrap();
        app.explorer_selected = idx;
        app.explorer_activate();
        assert!(app.workspace.explorer_rows().len() < before);
        assert!(app.explorer_selected < app.workspace.explorer_rows().len());
    }

    #[test]
    fn search_query_recomputes_results() {
        let mut app = app();
        app.set_search_query("readme".to_string());
        assert!(!app.search_results.is_empty());
        app.set_search_query(String::new());
        assert!(app.search_results.is_empty());
    }

    #[test]
    fn search_activate_opens_hit() {
        let mut app = app();
        app.set_search_query("mca".to_string());
        assert!(!app.search_results.is_empty());
        app.search_activate();
        assert_eq!(app.workspace.session.active_path(), Some("education/mca.md"));
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn cycle_tab_wraps() {
        let mut app = app();
        app.open_file("portfolio/about.java");
        app.open_file("portfolio/contact.json");
        app.cycle_tab(1);
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/README.md")
        );
        app.cycle_tab(-1);
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/contact.json")
        );
    }

    #[test]
    fn cursor_clamps_to_content() {
        let mut app = app();
        app.move_cursor(1000, 0);
        let content = app.workspace.active_content().unwrap();
        assert_eq!(app.cursor.0, content.split('\n').count());
        app.move_cursor(-1000, 0);
        assert_eq!(app.cursor.0, 1);
        app.move_cursor(0, -10);
        assert_eq!(app.cursor.1, 1);
    }

    #[test]
    fn terminal_submit_resets_cursor() {
        let mut app = app();
        app.move_cursor(2, 2);
        app.terminal.input = "about".to_string();
        app.terminal_submit();
        assert_eq!(app.cursor, (1, 1));
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/about.java")
        );
    }

    #[test]
    fn close_active_tab_falls_back() {
        let mut app = app();
        app.open_file("portfolio/about.java");
        app.close_active_tab();
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/README.md")
        );
        app.close_active_tab();
        assert_eq!(app.workspace.session.active_path(), None);
        // closing with no tabs left is a no-op
        app.close_active_tab();
    }
}
