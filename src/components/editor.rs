use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;
use crate::workspace::Highlight;

/// Keywords given a distinct color regardless of extension. Token hints, not
/// a lexer: good enough for the simulated code panes.
const KEYWORDS: &[&str] = &[
    "class",
    "public",
    "private",
    "final",
    "return",
    "implements",
    "import",
    "export",
    "const",
    "let",
    "var",
    "new",
    "extends",
    "static",
    "void",
    "String",
];

/// Read-only code view with a line-number gutter, token-hint highlighting,
/// cursor, and an optional problem-line highlight.
pub struct EditorWidget<'a> {
    path: Option<&'a str>,
    content: Option<&'a str>,
    cursor: (usize, usize),
    scroll: usize,
    highlight: Option<&'a Highlight>,
    theme: &'a ThemeColors,
    show_cursor: bool,
}

impl<'a> EditorWidget<'a> {
    pub fn new(
        path: Option<&'a str>,
        content: Option<&'a str>,
        cursor: (usize, usize),
        scroll: usize,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            path,
            content,
            cursor,
            scroll,
            highlight: None,
            theme,
            show_cursor: false,
        }
    }

    pub fn highlight(mut self, highlight: Option<&'a Highlight>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn show_cursor(mut self, show: bool) -> Self {
        self.show_cursor = show;
        self
    }

    /// Split one source line into styled spans by token hints.
    fn hint_spans(&self, line: &str) -> Vec<Span<'static>> {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            return vec![Span::styled(
                line.to_string(),
                Style::default().fg(self.theme.comment_fg),
            )];
        }

        let mut spans = Vec::new();
        let mut word = String::new();
        let mut in_string = false;
        let mut string_buf = String::new();

        let flush_word = |word: &mut String, spans: &mut Vec<Span<'static>>, theme: &ThemeColors| {
            if word.is_empty() {
                return;
            }
            let style = if KEYWORDS.contains(&word.as_str()) {
                Style::default().fg(theme.keyword_fg)
            } else {
                Style::default().fg(theme.editor_fg)
            };
            spans.push(Span::styled(std::mem::take(word), style));
        };

        for c in line.chars() {
            if in_string {
                string_buf.push(c);
                if c == '"' {
                    spans.push(Span::styled(
                        std::mem::take(&mut string_buf),
                        Style::default().fg(self.theme.string_fg),
                    ));
                    in_string = false;
                }
            } else if c == '"' {
                flush_word(&mut word, &mut spans, self.theme);
                in_string = true;
                string_buf.push(c);
            } else if c.is_alphanumeric() || c == '_' {
                word.push(c);
            } else {
                flush_word(&mut word, &mut spans, self.theme);
                spans.push(Span::styled(
                    c.to_string(),
                    Style::default().fg(self.theme.editor_fg),
                ));
            }
        }
        flush_word(&mut word, &mut spans, self.theme);
        if !string_buf.is_empty() {
            // unterminated string: style what we have
            spans.push(Span::styled(
                string_buf,
                Style::default().fg(self.theme.string_fg),
            ));
        }
        spans
    }
}

impl<'a> Widget for EditorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let Some(content) = self.content else {
            let msg = "Select a file from the Explorer.";
            let line = Line::from(Span::styled(msg, Style::default().fg(self.theme.dim_fg)));
            buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
            return;
        };

        let lines: Vec<&str> = content.split('\n').collect();
        let gutter_width = lines.len().to_string().len().max(3) as u16 + 1;

        for (row, line_idx) in (self.scroll..lines.len())
            .enumerate()
            .take(area.height as usize)
        {
            let y = area.y + row as u16;
            let line_no = line_idx + 1;

            let highlighted = self
                .highlight
                .map(|h| Some(h.path.as_str()) == self.path && h.line == line_no)
                .unwrap_or(false);
            let is_cursor_line = line_no == self.cursor.0;

            let nr_style = if is_cursor_line {
                Style::default()
                    .fg(self.theme.editor_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.line_nr_fg)
            };
            let nr = format!("{line_no:>width$} ", width = gutter_width as usize - 1);
            buf.set_string(area.x, y, &nr, nr_style);

            let mut spans = self.hint_spans(lines[line_idx]);
            if highlighted {
                for span in &mut spans {
                    span.style = span.style.bg(self.theme.highlight_bg);
                }
            }
            let line = Line::from(spans);
            let text_x = area.x + gutter_width;
            buf.set_line(text_x, y, &line, area.width.saturating_sub(gutter_width));

            // block cursor on the focused editor
            if self.show_cursor && is_cursor_line {
                let cx = text_x + (self.cursor.1 as u16).saturating_sub(1);
                if cx < area.x + area.width {
                    if let Some(cell) = buf.cell_mut((cx, y)) {
                        cell.set_style(
                            Style::default()
                                .bg(self.theme.editor_fg)
                                .fg(self.theme.editor_bg),
                        );
                    }
                }
            }
        }
    }
}
