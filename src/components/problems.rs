use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::theme::ThemeColors;
use crate::workspace::{Diagnostic, Severity};

/// Problems sidebar listing the simulated diagnostics.
pub struct ProblemsWidget<'a> {
    problems: &'a [Diagnostic],
    selected: usize,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> ProblemsWidget<'a> {
    pub fn new(problems: &'a [Diagnostic], selected: usize, theme: &'a ThemeColors) -> Self {
        Self {
            problems,
            selected,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for ProblemsWidget<'a> {
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

        if self.problems.is_empty() {
            let line = Line::from(Span::styled(
                "No problems have been detected in the workspace.",
                Style::default().fg(self.theme.dim_fg),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        for (i, problem) in self.problems.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let y = inner.y + i as u16;
            let (sign, sign_fg) = match problem.severity {
                Severity::Warning => ("⚠ ", self.theme.warning_fg),
                Severity::Error => ("⨯ ", self.theme.error_fg),
            };
            let base = if i == self.selected {
                Style::default()
                    .bg(self.theme.selected_bg)
                    .fg(self.theme.selected_fg)
            } else {
                Style::default().fg(self.theme.sidebar_fg)
            };
            let line = Line::from(vec![
                Span::styled(sign, Style::default().fg(sign_fg)),
                Span::styled(problem.message.clone(), base),
                Span::styled(
                    format!(" [{}:{}]", problem.file, problem.line),
                    Style::default().fg(self.theme.dim_fg),
                ),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
