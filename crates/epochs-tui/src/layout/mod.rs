//! Screen layout for the timeline.
//!
//! Regions, top to bottom:
//! 1. Heading (2 lines)
//! 2. Dial with the year counters in its centre (expands)
//! 3. Controls: period arrows and the `01/06` counter (1 line)
//! 4. Event strip (6 lines)
//! 5. Footer hints (1 line)
//!
//! The same [`ScreenLayout`] is used for drawing and for mouse hit-testing,
//! so clicks always land on what is on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 20;

/// Height of the event strip.
pub const EVENTS_HEIGHT: u16 = 6;
/// Column of the counter label inside the controls row.
pub const COUNTER_OFFSET: u16 = 8;

const SIDE_MARGIN: u16 = 2;
const ARROW_WIDTH: u16 = 3;
const STRIP_ARROW_WIDTH: u16 = 2;

/// Areas of every part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub heading: Rect,
    pub dial: Rect,
    pub controls: Rect,
    pub prev_arrow: Rect,
    pub next_arrow: Rect,
    pub events: Rect,
    /// Event cards, between the two strip arrows.
    pub cards: Rect,
    pub events_prev: Rect,
    pub events_next: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Heading
                Constraint::Min(8),                // Dial
                Constraint::Length(1),             // Controls
                Constraint::Length(1),             // Gap
                Constraint::Length(EVENTS_HEIGHT), // Events
                Constraint::Length(1),             // Footer
            ])
            .split(area);

        let heading = inset(rows[0]);
        let dial = inset(rows[1]);
        let controls = inset(rows[2]);
        let events = inset(rows[4]);

        let (prev_arrow, next_arrow) = split_controls(controls);

        let (events_prev, cards, events_next) = split_strip(events);

        Self {
            heading,
            dial,
            controls,
            prev_arrow,
            next_arrow,
            events,
            cards,
            events_prev,
            events_next,
            footer: rows[5],
        }
    }
}

/// Areas of the previous and next period arrows inside the controls row.
pub fn split_controls(controls: Rect) -> (Rect, Rect) {
    let prev = Rect::new(controls.x, controls.y, ARROW_WIDTH, 1).intersection(controls);
    let next = Rect::new(controls.x + ARROW_WIDTH + 1, controls.y, ARROW_WIDTH, 1)
        .intersection(controls);
    (prev, next)
}

/// Split the event strip into its previous arrow, the cards, and its next arrow.
pub fn split_strip(events: Rect) -> (Rect, Rect, Rect) {
    let side = STRIP_ARROW_WIDTH.min(events.width / 2);
    let prev = Rect::new(events.x, events.y, side, events.height);
    let next = Rect::new(events.right() - side, events.y, side, events.height);
    let cards = Rect::new(
        events.x + side,
        events.y,
        events.width.saturating_sub(side * 2),
        events.height,
    );
    (prev, cards, next)
}

fn inset(area: Rect) -> Rect {
    let margin = SIDE_MARGIN.min(area.width / 2);
    Rect::new(
        area.x + margin,
        area.y,
        area.width.saturating_sub(margin * 2),
        area.height,
    )
}

/// Whether the terminal is too small to draw the timeline.
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_at_default_size() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.heading, Rect::new(2, 0, 76, 2));
        assert_eq!(layout.dial, Rect::new(2, 2, 76, 13));
        assert_eq!(layout.controls, Rect::new(2, 15, 76, 1));
        assert_eq!(layout.events, Rect::new(2, 17, 76, 6));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_arrows_sit_left_of_counter() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.prev_arrow, Rect::new(2, 15, 3, 1));
        assert_eq!(layout.next_arrow, Rect::new(6, 15, 3, 1));
        assert!(layout.next_arrow.right() <= layout.controls.x + COUNTER_OFFSET);
    }

    #[test]
    fn test_cards_between_strip_arrows() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.events_prev.right(), layout.cards.x);
        assert_eq!(layout.cards.right(), layout.events_next.x);
        assert_eq!(layout.cards.width, 72);
    }

    #[test]
    fn test_is_too_small() {
        assert!(is_too_small(Rect::new(0, 0, 40, 24)));
        assert!(is_too_small(Rect::new(0, 0, 80, 10)));
        assert!(!is_too_small(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_fixed(100, 30, area), Rect::new(0, 0, 80, 24));
    }
}
