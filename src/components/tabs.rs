use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// The open-document tab row above the editor.
pub struct TabsWidget<'a> {
    open_paths: &'a [String],
    active_path: Option<&'a str>,
    theme: &'a ThemeColors,
}

impl<'a> TabsWidget<'a> {
    pub fn new(
        open_paths: &'a [String],
        active_path: Option<&'a str>,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            open_paths,
            active_path,
            theme,
        }
    }

    fn file_name(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }
}

impl<'a> Widget for TabsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for path in self.open_paths {
            let is_active = self.active_path == Some(path.as_str());
            let style = if is_active {
                Style::default()
                    .bg(self.theme.tab_active_bg)
                    .fg(self.theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.tab_inactive_fg)
            };
            spans.push(Span::styled(
                format!(" {} × ", Self::file_name(path)),
                style,
            ));
            spans.push(Span::styled("│", Style::default().fg(self.theme.border_fg)));
        }

        if spans.is_empty() {
            spans.push(Span::styled(
                " no open editors ",
                Style::default().fg(self.theme.dim_fg),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
