use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::search::SearchHit;
use crate::theme::ThemeColors;

/// Search sidebar: query input on top, ranked results below.
pub struct SearchWidget<'a> {
    query: &'a str,
    results: &'a [SearchHit],
    selected: usize,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> SearchWidget<'a> {
    pub fn new(
        query: &'a str,
        results: &'a [SearchHit],
        selected: usize,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            query,
            results,
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

impl<'a> Widget for SearchWidget<'a> {
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

        // Row 0: query input
        let input = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(self.theme.border_focused_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.query.to_string(), Style::default().fg(self.theme.sidebar_fg)),
        ]);
        buf.set_line(inner.x, inner.y, &input, inner.width);

        if inner.height < 2 {
            return;
        }

        if self.results.is_empty() {
            let msg = if self.query.trim().is_empty() {
                "Search files..."
            } else {
                "No results"
            };
            let line = Line::from(Span::styled(msg, Style::default().fg(self.theme.dim_fg)));
            buf.set_line(inner.x, inner.y + 1, &line, inner.width);
            return;
        }

        let visible = inner.height as usize - 1;
        let scroll = if self.selected >= visible {
            self.selected - visible + 1
        } else {
            0
        };

        for (i, (idx, hit)) in self
            .results
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + 1 + i as u16;
            let is_selected = idx == self.selected;
            let style = if is_selected {
                Style::default()
                    .bg(self.theme.selected_bg)
                    .fg(self.theme.selected_fg)
            } else {
                Style::default().fg(self.theme.file_fg)
            };
            let line = Line::from(vec![
                Span::styled(hit.path.clone(), style),
                Span::styled(
                    format!(" ({})", hit.matched.label()),
                    Style::default().fg(self.theme.dim_fg),
                ),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchKind;
    use crate::theme;

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
    fn empty_query_shows_hint() {
        let theme = theme::dark_theme();
        let widget = SearchWidget::new("", &[], 0, &theme);
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(content(&buf, area).contains("Search files..."));
    }

    #[test]
    fn no_results_message() {
        let theme = theme::dark_theme();
        let widget = SearchWidget::new("zzz", &[], 0, &theme);
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = content(&buf, area);
        assert!(text.contains("> zzz"));
        assert!(text.contains("No results"));
    }

    #[test]
    fn results_show_match_tags() {
        let theme = theme::dark_theme();
        let hits = vec![
            SearchHit {
                path: "portfolio/README.md".to_string(),
                matched: MatchKind::Filename,
            },
            SearchHit {
                path: "education/mca.md".to_string(),
                matched: MatchKind::Content,
            },
        ];
        let widget = SearchWidget::new("md", &hits, 0, &theme);
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = content(&buf, area);
        assert!(text.contains("portfolio/README.md (filename)"));
        assert!(text.contains("education/mca.md (content)"));
    }
}
