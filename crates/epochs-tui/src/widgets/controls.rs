//! Period arrows and the position counter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::put_clipped;
use crate::layout::{split_controls, COUNTER_OFFSET};
use crate::theme::Theme;

/// `◀ ▶ 01/06` row. A disabled arrow is drawn muted.
pub struct Controls<'a> {
    counter: &'a str,
    can_go_back: bool,
    can_go_forward: bool,
    theme: &'a Theme,
}

impl<'a> Controls<'a> {
    pub fn new(counter: &'a str, theme: &'a Theme) -> Self {
        Self {
            counter,
            can_go_back: true,
            can_go_forward: true,
            theme,
        }
    }

    #[must_use]
    pub fn can_go_back(mut self, enabled: bool) -> Self {
        self.can_go_back = enabled;
        self
    }

    #[must_use]
    pub fn can_go_forward(mut self, enabled: bool) -> Self {
        self.can_go_forward = enabled;
        self
    }

    fn arrow_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        }
    }
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (prev, next) = split_controls(area);
        put_clipped(
            buf,
            area,
            i32::from(prev.x) + 1,
            area.y,
            "◀",
            self.arrow_style(self.can_go_back),
        );
        put_clipped(
            buf,
            area,
            i32::from(next.x) + 1,
            area.y,
            "▶",
            self.arrow_style(self.can_go_forward),
        );
        put_clipped(
            buf,
            area,
            i32::from(area.x + COUNTER_OFFSET),
            area.y,
            self.counter,
            Style::default().fg(self.theme.subtext),
        );
    }
}
