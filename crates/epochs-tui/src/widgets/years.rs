//! From/to year counters.

use epochs_engine::YearRange;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::put_clipped;
use crate::theme::Theme;

/// The two year counters, centred on the middle of the area.
pub struct YearsLabel<'a> {
    years: YearRange,
    theme: &'a Theme,
}

impl<'a> YearsLabel<'a> {
    pub fn new(years: YearRange, theme: &'a Theme) -> Self {
        Self { years, theme }
    }
}

impl Widget for YearsLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let cx = i32::from(area.x) + i32::from(area.width / 2);
        let y = area.y + area.height / 2;
        let from = self.years.from.to_string();
        let to = self.years.to.to_string();
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let from_width = i32::try_from(from.width()).unwrap_or(0);
        put_clipped(buf, area, cx - 1 - from_width, y, &from, bold.fg(self.theme.from_year));
        put_clipped(buf, area, cx + 1, y, &to, bold.fg(self.theme.to_year));
    }
}
