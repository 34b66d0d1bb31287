//! Event strip: cards that scroll sideways and fade between periods.

use epochs_engine::{Event, TimelineView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::put_clipped;
use crate::layout::split_strip;
use crate::theme::Theme;

/// Fade offset units per terminal row.
const OFFSET_PER_ROW: f64 = 10.0;
const MIN_CARD_WIDTH: u16 = 6;

/// Horizontally scrolling row of event cards.
pub struct EventStrip<'a> {
    events: &'a [Event],
    opacity: f64,
    offset: f64,
    position: f64,
    per_view: usize,
    can_prev: bool,
    can_next: bool,
    theme: &'a Theme,
}

impl<'a> EventStrip<'a> {
    pub fn new(view: &TimelineView<'a>, theme: &'a Theme) -> Self {
        Self {
            events: view.events,
            opacity: view.events_opacity,
            offset: view.events_offset,
            position: view.strip_position,
            per_view: view.slides_per_view.max(1),
            can_prev: view.strip_can_prev,
            can_next: view.strip_can_next,
            theme,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift_rows(&self, height: u16) -> u16 {
        let rows = (self.offset.max(0.0) / OFFSET_PER_ROW).round();
        (rows as u16).min(height)
    }

    fn render_card(&self, event: &Event, x: i32, top: u16, width: u16, cards: Rect, buf: &mut Buffer) {
        let year_style = Style::default()
            .fg(self.theme.faded(self.theme.event_year, self.opacity))
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.theme.faded(self.theme.text, self.opacity));

        put_clipped(buf, cards, x, top, &event.year.to_string(), year_style);

        let wrap_width = usize::from(width.saturating_sub(2)).max(1);
        for (i, line) in textwrap::wrap(&event.text, wrap_width).iter().enumerate() {
            let row = top.saturating_add(u16::try_from(i + 1).unwrap_or(u16::MAX));
            if row >= cards.bottom() {
                break;
            }
            put_clipped(buf, cards, x, row, line, text_style);
        }
    }
}

impl Widget for EventStrip<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (prev, cards, next) = split_strip(area);
        let arrow_style = Style::default().fg(self.theme.subtext);
        if self.can_prev && !prev.is_empty() {
            put_clipped(buf, prev, i32::from(prev.x), prev.y + 1, "‹", arrow_style);
        }
        if self.can_next && !next.is_empty() {
            put_clipped(buf, next, i32::from(next.x) + 1, next.y + 1, "›", arrow_style);
        }

        let top = cards.y + self.shift_rows(cards.height);
        if self.events.is_empty() {
            let style = Style::default().fg(self.theme.faded(self.theme.muted, self.opacity));
            put_clipped(buf, cards, i32::from(cards.x), top, "No events in this period", style);
            return;
        }

        let card_width = cards.width / self.per_view as u16;
        if card_width < MIN_CARD_WIDTH {
            return;
        }

        let position = self.position.max(0.0);
        let first = position.floor() as usize;
        let last = (first + self.per_view + 1).min(self.events.len());
        for (index, event) in self.events.iter().enumerate().take(last).skip(first) {
            let left = f64::from(cards.x) + (index as f64 - position) * f64::from(card_width);
            self.render_card(event, left.round() as i32, top, card_width, cards, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use epochs_engine::{builtin_timeline, Config, Direction, TimelineState};
    use std::time::Duration;

    fn events_area() -> Rect {
        Rect::new(2, 17, 76, 6)
    }

    fn render(state: &TimelineState) -> Buffer {
        let theme = Theme::default();
        let view = state.view();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        EventStrip::new(&view, &theme).render(events_area(), &mut buf);
        buf
    }

    #[test]
    fn test_first_three_cards_visible() {
        let state = TimelineState::new(builtin_timeline(), &Config::default());
        let screen = buffer_to_string(&render(&state));
        assert!(screen.contains("1957"));
        assert!(screen.contains("Sputnik 1, the first"));
        assert!(screen.contains("1961"));
        assert!(screen.contains("1965"));
        assert!(!screen.contains("1966"));
    }

    #[test]
    fn test_strip_arrows_follow_scroll_range() {
        let state = TimelineState::new(builtin_timeline(), &Config::default());
        let buf = render(&state);
        assert_ne!(buf[(2, 18)].symbol(), "‹");
        assert_eq!(buf[(77, 18)].symbol(), "›");
    }

    #[test]
    fn test_scrolled_strip_hides_first_card() {
        let mut state = TimelineState::new(builtin_timeline(), &Config::default());
        state.events_next(Duration::ZERO);
        state.tick(Duration::from_secs(1));

        let buf = render(&state);
        let screen = buffer_to_string(&buf);
        assert!(!screen.contains("1957"));
        assert!(screen.contains("1966"));
        assert_eq!(buf[(2, 18)].symbol(), "‹");
    }

    #[test]
    fn test_faded_out_strip_drawn_in_background_colour() {
        let mut state = TimelineState::new(builtin_timeline(), &Config::default());
        state.advance(Direction::Forward, Duration::ZERO);
        state.tick(Duration::from_millis(300));

        let view = state.view();
        assert!(view.events_opacity.abs() < 1e-9);

        let theme = Theme::default();
        let buf = render(&state);
        // Offset 20 pushes the cards two rows down
        assert_eq!(buf[(4, 19)].symbol(), "1");
        assert_eq!(buf[(4, 19)].fg, theme.base);
        assert_ne!(buf[(4, 17)].symbol(), "1");
    }

    #[test]
    fn test_empty_period_message() {
        let timeline = epochs_engine::Timeline::new(vec![epochs_engine::Period::new(
            1900, 1910, "Quiet",
        )])
        .unwrap();
        let state = TimelineState::new(timeline, &Config::default());
        let screen = buffer_to_string(&render(&state));
        assert!(screen.contains("No events in this period"));
    }
}
