//! Top-level layout and render dispatch.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Focus, SidebarView};
use crate::components::editor::EditorWidget;
use crate::components::explorer::ExplorerWidget;
use crate::components::problems::ProblemsWidget;
use crate::components::search::SearchWidget;
use crate::components::status_bar::StatusBarWidget;
use crate::components::tabs::TabsWidget;
use crate::components::terminal::TerminalWidget;

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // main: sidebar + editor
            Constraint::Length(8), // terminal
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(10)])
        .split(rows[0]);

    render_sidebar(app, frame, columns[0]);
    render_editor_column(app, frame, columns[1]);
    render_terminal(app, frame, rows[1]);

    let info = app.status();
    frame.render_widget(StatusBarWidget::new(&info, &app.theme), rows[2]);
}

fn border_style(app: &App, focused: bool) -> Style {
    if focused {
        Style::default().fg(app.theme.border_focused_fg)
    } else {
        Style::default().fg(app.theme.border_fg)
    }
}

fn render_sidebar(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let title = match app.sidebar {
        SidebarView::Explorer => " Explorer ",
        SidebarView::Search => " Search ",
        SidebarView::Problems => " Problems ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app, focused));

    match app.sidebar {
        SidebarView::Explorer => {
            let rows = app.workspace.explorer_rows();
            let widget =
                ExplorerWidget::new(&rows, app.explorer_selected, &app.theme).block(block);
            frame.render_widget(widget, area);
        }
        SidebarView::Search => {
            let widget = SearchWidget::new(
                &app.search_query,
                &app.search_results,
                app.search_selected,
                &app.theme,
            )
            .block(block);
            frame.render_widget(widget, area);
        }
        SidebarView::Problems => {
            let widget = ProblemsWidget::new(
                app.workspace.diagnostics.problems(),
                app.problems_selected,
                &app.theme,
            )
            .block(block);
            frame.render_widget(widget, area);
        }
    }
}

fn render_editor_column(app: &mut App, frame: &mut Frame, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let tabs = TabsWidget::new(
        app.workspace.session.open_paths(),
        app.workspace.session.active_path(),
        &app.theme,
    );
    frame.render_widget(tabs, parts[0]);

    // Keep the cursor line visible before borrowing content.
    let editor_area = parts[1];
    let visible = editor_area.height as usize;
    if visible > 0 {
        let line = app.cursor.0.saturating_sub(1);
        if line < app.editor_scroll {
            app.editor_scroll = line;
        } else if line >= app.editor_scroll + visible {
            app.editor_scroll = line - visible + 1;
        }
    }

    let editor = EditorWidget::new(
        app.workspace.session.active_path(),
        app.workspace.active_content(),
        app.cursor,
        app.editor_scroll,
        &app.theme,
    )
    .highlight(app.workspace.highlight.as_ref())
    .show_cursor(app.focus == Focus::Editor);
    frame.render_widget(editor, editor_area);
}

fn render_terminal(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Terminal;
    let block = Block::default()
        .title(" Terminal ")
        .borders(Borders::ALL)
        .border_style(border_style(app, focused));
    let widget = TerminalWidget::new(&app.terminal, &app.theme, focused).block(block);
    frame.render_widget(widget, area);
}
