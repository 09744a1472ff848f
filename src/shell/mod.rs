//! The simulated terminal: an append-only scrollback plus a line-oriented
//! command interpreter.
//!
//! Submitting the input buffer trims it, matches it against the fixed
//! vocabulary, and appends the echo plus result entries. `clear` is the one
//! exception: it replaces the scrollback with the welcome entries and echoes
//! nothing. The interpreter drives the editor session (opening files) but
//! never mutates the VFS.

pub mod command;

pub use command::{Command, VERBS};

use tracing::debug;

use crate::config::ContentPaths;
use crate::workspace::Workspace;

/// Visual category of a scrollback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    System,
    Input,
    Output,
    Success,
    Warning,
    Error,
}

/// One line of terminal scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

impl Entry {
    fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Hook for side effects that leave the simulation, like opening the resume
/// resource. Injected so tests can observe the call without a real viewer.
pub trait ExternalActions {
    fn open_resume(&mut self);
}

/// External actions that only leave a log trail. Production default: the TUI
/// has nowhere to open a document viewer, so the action is just recorded.
#[derive(Debug, Default)]
pub struct LoggedActions;

impl ExternalActions for LoggedActions {
    fn open_resume(&mut self) {
        tracing::info!("resume requested");
    }
}

/// Scrollback log plus the uncommitted input line.
pub struct TerminalState {
    pub scrollback: Vec<Entry>,
    pub input: String,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            scrollback: welcome_entries(),
            input: String::new(),
        }
    }

    /// Commit the input buffer and interpret it.
    ///
    /// The buffer is always cleared, whatever the outcome. Blank input
    /// appends nothing.
    pub fn submit(
        &mut self,
        workspace: &mut Workspace,
        content: &ContentPaths,
        external: &mut dyn ExternalActions,
    ) {
        let line = std::mem::take(&mut self.input);
        let cmd = line.trim();
        if cmd.is_empty() {
            return;
        }

        let parsed = Command::parse(cmd);
        if parsed == Some(Command::Clear) {
            self.scrollback = welcome_entries();
            return;
        }

        self.scrollback
            .push(Entry::new(EntryKind::Input, format!("$ {cmd}")));

        match parsed {
            Some(Command::Help) => {
                self.scrollback.push(Entry::new(
                    EntryKind::Output,
                    format!("Available commands: {}", VERBS.join(", ")),
                ));
            }
            Some(Command::About) => self.open_target(workspace, &content.about),
            Some(Command::Skills) => self.open_target(workspace, &content.skills),
            Some(Command::Projects) => self.open_target(workspace, &content.projects),
            Some(Command::Experience) => self.open_target(workspace, &content.experience),
            Some(Command::Education) => self.open_target(workspace, &content.education),
            Some(Command::Contact) => self.open_target(workspace, &content.contact),
            Some(Command::Resume) => {
                external.open_resume();
                self.scrollback
                    .push(Entry::new(EntryKind::Success, "Downloading resume..."));
            }
            Some(Command::Game) => {
                self.scrollback.push(Entry::new(
                    EntryKind::Warning,
                    "Launching ascii game... (coming soon)",
                ));
            }
            Some(Command::Clear) => unreachable!("clear handled above"),
            None => {
                debug!(command = cmd, "unknown terminal command");
                self.scrollback.push(Entry::new(
                    EntryKind::Error,
                    format!("Unknown command: {cmd}"),
                ));
            }
        }
    }

    fn open_target(&mut self, workspace: &mut Workspace, path: &str) {
        if workspace.open_file(path) {
            let name = path.rsplit('/').next().unwrap_or(path);
            self.scrollback
                .push(Entry::new(EntryKind::Success, format!("Opening {name}")));
        } else {
            debug!(path, "terminal open target did not resolve");
            self.scrollback
                .push(Entry::new(EntryKind::Error, format!("No such file: {path}")));
        }
    }
}

/// The fixed entries shown at startup and after `clear`.
pub fn welcome_entries() -> Vec<Entry> {
    vec![
        Entry::new(EntryKind::System, "Welcome to the portfolio terminal v1.0.0"),
        Entry::new(EntryKind::System, "Type \"help\" for available commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::seed::default_seed;
    use crate::vfs::Vfs;
    use crate::workspace::EditorSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingActions {
        resume_opens: usize,
    }

    impl ExternalActions for RecordingActions {
        fn open_resume(&mut self) {
            self.resume_opens += 1;
        }
    }

    fn fixture() -> (TerminalState, Workspace, ContentPaths, RecordingActions) {
        let vfs = Vfs::from_seed(&default_seed()).unwrap();
        let ws = Workspace::with_rng(
            vfs,
            EditorSession::new(["portfolio"]),
            StdRng::seed_from_u64(3),
        );
        (
            TerminalState::new(),
            ws,
            ContentPaths::default(),
            RecordingActions::default(),
        )
    }

    fn run(term: &mut TerminalState, ws: &mut Workspace, cp: &ContentPaths, line: &str) {
        let mut ext = RecordingActions::default();
        term.input = line.to_string();
        term.submit(ws, cp, &mut ext);
    }

    #[test]
    fn starts_with_welcome() {
        let (term, ..) = fixture();
        assert_eq!(term.scrollback, welcome_entries());
    }

    #[test]
    fn blank_input_appends_nothing_and_clears_buffer() {
        let (mut term, mut ws, cp, _) = fixture();
        run(&mut term, &mut ws, &cp, "   ");
        assert_eq!(term.scrollback, welcome_entries());
        assert!(term.input.is_empty());
    }

    #[test]
    fn help_lists_every_verb() {
        let (mut term, mut ws, cp, _) = fixture();
        run(&mut term, &mut ws, &cp, "help");
        let last = term.scrollback.last().unwrap();
        assert_eq!(last.kind, EntryKind::Output);
        for verb in VERBS {
            assert!(last.text.contains(verb));
        }
        assert_eq!(
            term.scrollback[term.scrollback.len() - 2],
            Entry::new(EntryKind::Input, "$ help")
        );
    }

    #[test]
    fn about_opens_file_and_reports_success() {
        let (mut term, mut ws, cp, _) = fixture();
        run(&mut term, &mut ws, &cp, "about");
        let n = term.scrollback.len();
        assert_eq!(term.scrollback[n - 2].kind, EntryKind::Input);
        assert_eq!(term.scrollback[n - 2].text, "$ about");
        assert_eq!(term.scrollback[n - 1].kind, EntryKind::Success);
        assert_eq!(term.scrollback[n - 1].text, "Opening about.java");
        assert_eq!(ws.session.active_path(), Some("portfolio/about.java"));
    }

    #[test]
    fn scenario_open_via_terminal_then_close() {
        let (mut term, mut ws, cp, _) = fixture();
        ws.open_file("portfolio/README.md");
        run(&mut term, &mut ws, &cp, "about");
        assert_eq!(
            ws.session.open_paths(),
            ["portfolio/README.md", "portfolio/about.java"]
        );
        assert_eq!(ws.session.active_path(), Some("portfolio/about.java"));
        ws.close_file("portfolio/about.java");
        assert_eq!(ws.session.open_paths(), ["portfolio/README.md"]);
        assert_eq!(ws.session.active_path(), Some("portfolio/README.md"));
    }

    #[test]
    fn unknown_command_appends_one_echo_and_one_error() {
        let (mut term, mut ws, cp, _) = fixture();
        let before = term.scrollback.len();
        run(&mut term, &mut ws, &cp, "frobnicate");
        assert_eq!(term.scrollback.len(), before + 2);
        assert_eq!(term.scrollback[before].kind, EntryKind::Input);
        assert_eq!(term.scrollback[before + 1].kind, EntryKind::Error);
        assert_eq!(term.scrollback[before + 1].text, "Unknown command: frobnicate");
    }

    #[test]
    fn fuzzed_commands_never_panic() {
        let (mut term, mut ws, cp, _) = fixture();
        for line in ["", " ", "\t", "ABOUT", "about ", "$ about", "🦀", "a b c", "clear!"] {
            run(&mut term, &mut ws, &cp, line);
        }
    }

    #[test]
    fn clear_resets_to_welcome_without_echo() {
        let (mut term, mut ws, cp, _) = fixture();
        run(&mut term, &mut ws, &cp, "help");
        run(&mut term, &mut ws, &cp, "about");
        assert!(term.scrollback.len() > 2);
        run(&mut term, &mut ws, &cp, "clear");
        assert_eq!(term.scrollback, welcome_entries());
        assert_eq!(term.scrollback.len(), 2);
    }

    #[test]
    fn game_is_a_warning_stub() {
        let (mut term, mut ws, cp, _) = fixture();
        run(&mut term, &mut ws, &cp, "game");
        let last = term.scrollback.last().unwrap();
        assert_eq!(last.kind, EntryKind::Warning);
        assert!(last.text.contains("coming soon"));
    }

    #[test]
    fn resume_invokes_external_action() {
        let (mut term, mut ws, cp, mut ext) = fixture();
        term.input = "resume".to_string();
        term.submit(&mut ws, &cp, &mut ext);
        assert_eq!(ext.resume_opens, 1);
        assert_eq!(term.scrollback.last().unwrap().kind, EntryKind::Success);
        // resume never touches the session
        assert!(ws.session.open_paths().is_empty());
    }

    #[test]
    fn missing_target_reports_error_and_opens_nothing() {
        let (mut term, mut ws, _, _) = fixture();
        let cp = ContentPaths {
            about: "portfolio/nope.java".to_string(),
            ..ContentPaths::default()
        };
        run(&mut term, &mut ws, &cp, "about");
        assert_eq!(term.scrollback.last().unwrap().kind, EntryKind::Error);
        assert!(ws.session.open_paths().is_empty());
    }
}
