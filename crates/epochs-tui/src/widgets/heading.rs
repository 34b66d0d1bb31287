//! Timeline heading.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::truncate_str;
use crate::theme::Theme;

/// Accent bar followed by the timeline title.
pub struct Heading<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> Heading<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Widget for Heading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 3 {
            return;
        }

        let title = truncate_str(self.title, usize::from(area.width) - 2);
        let line = Line::from(vec![
            Span::styled("▍ ", Style::default().fg(self.theme.primary)),
            Span::styled(
                title,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line).render(Rect::new(area.x, area.y, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use insta::assert_snapshot;

    #[test]
    fn test_heading_renders_title() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        Heading::new("Historical Dates", &theme).render(area, &mut buf);
        assert_snapshot!(buffer_to_string(&buf), @"▍ Historical Dates");
    }

    #[test]
    fn test_heading_truncates_long_title() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Heading::new("Historical Dates", &theme).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "▍ Historica…");
    }
}
