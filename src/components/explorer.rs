use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::theme::ThemeColors;
use crate::workspace::ExplorerRow;

/// Explorer widget rendering the virtual file tree.
pub struct ExplorerWidget<'a> {
    rows: &'a [ExplorerRow],
    selected: usize,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> ExplorerWidget<'a> {
    pub fn new(rows: &'a [ExplorerRow], selected: usize, theme: &'a ThemeColors) -> Self {
        Self {
            rows,
            selected,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn indicator(row: &ExplorerRow) -> &'static str {
        if row.is_folder {
            if row.is_expanded {
                "▾ "
            } else {
                "▸ "
            }
        } else {
            "  "
        }
    }
}

impl<'a> Widget for ExplorerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 || self.rows.is_empty() {
            return;
        }

        let visible = inner.height as usize;
        let scroll = if self.selected >= visible {
            self.selected - visible + 1
        } else {
            0
        };

        for (i, (idx, row)) in self
            .rows
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + i as u16;
            let is_selected = idx == self.selected;

            let style = if is_selected {
                Style::default()
                    .bg(self.theme.selected_bg)
                    .fg(self.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if row.is_folder {
                Style::default()
                    .fg(self.theme.folder_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.file_fg)
            };

            let indent = "  ".repeat(row.depth);
            let text = format!("{indent}{}{}", Self::indicator(row), row.name);
            let line = Line::from(Span::styled(text, style));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
