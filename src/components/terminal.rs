//! Terminal panel: scrollback tail plus the prompt line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::shell::{EntryKind, TerminalState};
use crate::theme::ThemeColors;

/// Widget that renders the simulated terminal.
pub struct TerminalWidget<'a> {
    state: &'a TerminalState,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
    show_cursor: bool,
}

impl<'a> TerminalWidget<'a> {
    pub fn new(state: &'a TerminalState, theme: &'a ThemeColors, show_cursor: bool) -> Self {
        Self {
            state,
            theme,
            block: None,
            show_cursor,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn entry_style(&self, kind: EntryKind) -> Style {
        match kind {
            EntryKind::System => Style::default().fg(self.theme.dim_fg),
            EntryKind::Input => Style::default().fg(self.theme.sidebar_fg),
            EntryKind::Output => Style::default().fg(self.theme.editor_fg),
            EntryKind::Success => Style::default().fg(self.theme.success_fg),
            EntryKind::Warning => Style::default().fg(self.theme.warning_fg),
            EntryKind::Error => Style::default().fg(self.theme.error_fg),
        }
    }
}

impl<'a> Widget for TerminalWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Last rows of scrollback, prompt pinned to the bottom row.
        let history_height = inner.height.saturating_sub(1) as usize;
        let skip = self.state.scrollback.len().saturating_sub(history_height);

        for (row, entry) in self.state.scrollback.iter().skip(skip).enumerate() {
            if row >= history_height {
                break;
            }
            let y = inner.y + row as u16;
            let line = Line::from(Span::styled(
                entry.text.clone(),
                self.entry_style(entry.kind),
            ));
            buf.set_line(inner.x, y, &line, inner.width);
        }

        let prompt_y = inner.y + inner.height - 1;
        let mut spans = vec![
            Span::styled(
                "$ ",
                Style::default()
                    .fg(self.theme.prompt_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.state.input.clone(),
                Style::default().fg(self.theme.editor_fg),
            ),
        ];
        if self.show_cursor {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(self.theme.border_focused_fg),
            ));
        }
        let prompt = Line::from(spans);
        buf.set_line(inner.x, prompt_y, &prompt, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Borders;

    fn content(buf: &Buffer, area: Rect) -> String {
        let mut s = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                s.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn renders_welcome_and_prompt() {
        let state = TerminalState::new();
        let theme = crate::theme::dark_theme();
        let widget = TerminalWidget::new(&state, &theme, false)
            .block(Block::default().borders(Borders::ALL).title(" Terminal "));
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = content(&buf, area);
        assert!(text.contains("Welcome to the portfolio terminal"));
        assert!(text.contains("$"));
    }

    #[test]
    fn shows_typed_input() {
        let mut state = TerminalState::new();
        state.input = "help".to_string();
        let theme = crate::theme::dark_theme();
        let widget = TerminalWidget::new(&state, &theme, true);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(content(&buf, area).contains("$ help"));
    }

    #[test]
    fn long_scrollback_shows_tail() {
        let mut state = TerminalState::new();
        for i in 0..50 {
            state.scrollback.push(crate::shell::Entry {
                kind: EntryKind::Output,
                text: format!("line {i}"),
            });
        }
        let theme = crate::theme::dark_theme();
        let widget = TerminalWidget::new(&state, &theme, false);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = content(&buf, area);
        assert!(text.contains("line 49"));
        assert!(!text.contains("line 1\n"));
    }

    #[test]
    fn zero_area_does_not_panic() {
        let state = TerminalState::new();
        let theme = crate::theme::dark_theme();
        let widget = TerminalWidget::new(&state, &theme, false);
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
