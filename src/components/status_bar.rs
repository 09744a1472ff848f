use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::status::StatusInfo;
use crate::theme::ThemeColors;

/// Bottom status bar: branch and problem counts on the left; cursor,
/// language, encoding, and clock on the right.
pub struct StatusBarWidget<'a> {
    info: &'a StatusInfo,
    theme: &'a ThemeColors,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(info: &'a StatusInfo, theme: &'a ThemeColors) -> Self {
        Self { info, theme }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);

        let left = format!(
            "  {}  {} ⨯  {} ⚠",
            self.info.branch, self.info.errors, self.info.warnings
        );
        let right = format!(
            "Ln {}, Col {}  {}  {}  {}  ",
            self.info.line, self.info.col, self.info.language, self.info.encoding, self.info.clock
        );

        let pad = width
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count());
        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(" ".repeat(pad), style),
            Span::styled(right, style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
