//! Focus-based key routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus, SidebarView};

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global chords first; they win over any focused panel.
    if ctrl {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                app.quit();
                return;
            }
            KeyCode::Char('e') => {
                app.show_sidebar(SidebarView::Explorer);
                return;
            }
            KeyCode::Char('f') => {
                app.show_sidebar(SidebarView::Search);
                return;
            }
            KeyCode::Char('p') => {
                app.show_sidebar(SidebarView::Problems);
                return;
            }
            KeyCode::Char('w') => {
                app.close_active_tab();
                return;
            }
            _ => {}
        }
    }

    if key.code == KeyCode::Tab && app.focus != Focus::Terminal {
        app.focus = match app.focus {
            Focus::Sidebar => Focus::Editor,
            Focus::Editor => Focus::Terminal,
            Focus::Terminal => Focus::Sidebar,
        };
        return;
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Editor => handle_editor_key(app, key, ctrl),
        Focus::Terminal => handle_terminal_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match app.sidebar {
        SidebarView::Explorer => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.explorer_next(),
            KeyCode::Up | KeyCode::Char('k') => app.explorer_previous(),
            KeyCode::Enter => app.explorer_activate(),
            _ => {}
        },
        SidebarView::Search => match key.code {
            KeyCode::Char(c) => app.search_push(c),
            KeyCode::Backspace => app.search_pop(),
            KeyCode::Down => app.search_next(),
            KeyCode::Up => app.search_previous(),
            KeyCode::Enter => app.search_activate(),
            _ => {}
        },
        SidebarView::Problems => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.problems_next(),
            KeyCode::Up | KeyCode::Char('k') => app.problems_previous(),
            KeyCode::Enter => app.problems_activate(),
            _ => {}
        },
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Right if ctrl => app.cycle_tab(1),
        KeyCode::Left if ctrl => app.cycle_tab(-1),
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::PageUp => app.move_cursor(-20, 0),
        KeyCode::PageDown => app.move_cursor(20, 0),
        _ => {}
    }
}

fn handle_terminal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.terminal_submit(),
        KeyCode::Backspace => app.terminal_backspace(),
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Sidebar,
        KeyCode::Char(c) => app.terminal_input(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::theme;
    use crate::vfs::seed::default_seed;

    fn app() -> App {
        App::new(&AppConfig::default(), &default_seed(), theme::dark_theme()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Sidebar);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Terminal);
        // Tab is text inside the terminal view; Esc leaves instead
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn sidebar_chords_switch_views() {
        let mut app = app();
        handle_key_event(&mut app, ctrl('f'));
        assert_eq!(app.sidebar, SidebarView::Search);
        handle_key_event(&mut app, ctrl('p'));
        assert_eq!(app.sidebar, SidebarView::Problems);
        handle_key_event(&mut app, ctrl('e'));
        assert_eq!(app.sidebar, SidebarView::Explorer);
    }

    #[test]
    fn search_keys_edit_query() {
        let mut app = app();
        handle_key_event(&mut app, ctrl('f'));
        for c in "readme".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.search_query, "readme");
        assert!(!app.search_results.is_empty());
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search_query, "readm");
    }

    #[test]
    fn terminal_keys_type_and_submit() {
        let mut app = app();
        app.focus = Focus::Terminal;
        for c in "help".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.terminal.input, "help");
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.terminal.input.is_empty());
        assert!(app
            .terminal
            .scrollback
            .iter()
            .any(|e| e.text.starts_with("Available commands")));
    }

    #[test]
    fn explorer_enter_opens_selected_file() {
        let mut app = app();
        // row 0 is the "portfolio" folder; row 1 its first file
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/README.md")
        );
    }

    #[test]
    fn ctrl_w_closes_active_tab() {
        let mut app = app();
        app.open_file("portfolio/about.java");
        handle_key_event(&mut app, ctrl('w'));
        assert_eq!(
            app.workspace.session.active_path(),
            Some("portfolio/README.md")
        );
    }
}
