//! Application state and update logic for the epochs TUI.

use crossterm::event::{KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use epochs_engine::{Direction, TimelineState};
use ratatui::layout::{Position, Rect};
use std::time::Duration;
use tracing::debug;

use crate::event::{key_to_action, Action, Event};
use crate::layout::ScreenLayout;
use crate::theme::Theme;
use crate::widgets::DialGeometry;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// The timeline widget being shown.
    pub state: TimelineState,

    pub theme: Theme,

    /// Terminal area, kept for mouse hit-testing.
    pub area: Rect,
}

impl App {
    pub fn new(state: TimelineState, theme: Theme, area: Rect) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            state,
            theme,
            area,
        }
    }

    /// Apply one event at clock time `now`.
    ///
    /// Animations advance on every event, not only on ticks. Returns whether
    /// the screen needs redrawing.
    pub fn handle_event(&mut self, event: &Event, now: Duration) -> bool {
        let was_animating = self.state.is_animating();
        self.tick(now);

        let changed = match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return was_animating;
                }
                self.handle_action(key_to_action(*key), now);
                true
            }
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse, now);
                mouse.kind != MouseEventKind::Moved
            }
            Event::Tick => false,
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                true
            }
        };
        changed || was_animating
    }

    /// Handle a key action at clock time `now`.
    pub fn handle_action(&mut self, action: Action, now: Duration) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            Action::None => return,
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        debug!(?action, "action");
        match action {
            Action::Back => self.should_quit = true,
            Action::PrevPeriod => {
                self.state.advance(Direction::Backward, now);
            }
            Action::NextPeriod => {
                self.state.advance(Direction::Forward, now);
            }
            Action::Jump(index) => {
                self.state
                    .jump_to(i64::try_from(index).unwrap_or(i64::MAX), now);
            }
            Action::First => {
                self.state.jump_to(0, now);
            }
            Action::Last => {
                self.state.jump_to(i64::MAX, now);
            }
            Action::EventsPrev => self.state.events_prev(now),
            Action::EventsNext => self.state.events_next(now),
            Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Handle a mouse event at clock time `now`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Duration) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_action(Action::EventsNext, now),
            MouseEventKind::ScrollUp => self.handle_action(Action::EventsPrev, now),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_help {
                    self.show_help = false;
                    return;
                }
                self.click(mouse.column, mouse.row, now);
            }
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Duration) {
        let layout = ScreenLayout::new(self.area);
        let position = Position::new(column, row);

        if layout.prev_arrow.contains(position) {
            self.handle_action(Action::PrevPeriod, now);
        } else if layout.next_arrow.contains(position) {
            self.handle_action(Action::NextPeriod, now);
        } else if layout.events_prev.contains(position) {
            self.handle_action(Action::EventsPrev, now);
        } else if layout.events_next.contains(position) {
            self.handle_action(Action::EventsNext, now);
        } else if layout.dial.contains(position) {
            let Some(angle) = DialGeometry::new(layout.dial).angle_at(column, row) else {
                return;
            };
            if let Some(index) = self.state.dot_at_angle(angle) {
                debug!(index, angle, "marker clicked");
                self.state
                    .jump_to(i64::try_from(index).unwrap_or(i64::MAX), now);
            }
        }
    }

    /// Advance animations to clock time `now`.
    pub fn tick(&mut self, now: Duration) {
        self.state.tick(now);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, TEST_HEIGHT, TEST_WIDTH};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    const NOW: Duration = Duration::ZERO;

    fn click_at(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn settle(app: &mut App) {
        app.tick(Duration::from_secs(10));
    }

    #[test]
    fn test_quit_action() {
        let mut app = create_test_app();
        app.handle_action(Action::Quit, NOW);
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = create_test_app();
        app.handle_action(Action::Back, NOW);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle_and_close() {
        let mut app = create_test_app();
        app.handle_action(Action::Help, NOW);
        assert!(app.show_help);

        // Any key closes help without acting on it
        app.handle_action(Action::NextPeriod, NOW);
        assert!(!app.show_help);
        assert_eq!(app.state.active_index(), 0);

        app.handle_action(Action::Help, NOW);
        app.handle_action(Action::Quit, NOW);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_period_navigation() {
        let mut app = create_test_app();
        app.handle_action(Action::NextPeriod, NOW);
        app.handle_action(Action::NextPeriod, NOW);
        assert_eq!(app.state.active_index(), 2);
        app.handle_action(Action::PrevPeriod, NOW);
        assert_eq!(app.state.active_index(), 1);

        app.handle_action(Action::Last, NOW);
        assert_eq!(app.state.active_index(), 5);
        app.handle_action(Action::First, NOW);
        assert_eq!(app.state.active_index(), 0);
    }

    #[test]
    fn test_jump_past_end_clamps() {
        let mut app = create_test_app();
        app.handle_action(Action::Jump(8), NOW);
        assert_eq!(app.state.active_index(), 5);
    }

    #[test]
    fn test_click_arrows() {
        let mut app = create_test_app();
        let layout = ScreenLayout::new(app.area);

        let next = layout.next_arrow;
        app.handle_mouse(click_at(next.x + 1, next.y), NOW);
        assert_eq!(app.state.active_index(), 1);

        let prev = layout.prev_arrow;
        app.handle_mouse(click_at(prev.x + 1, prev.y), NOW);
        assert_eq!(app.state.active_index(), 0);
    }

    #[test]
    fn test_click_marker_jumps() {
        let mut app = create_test_app();
        let layout = ScreenLayout::new(app.area);
        let geometry = DialGeometry::new(layout.dial);

        // Period 4 rests three steps (180°) after the active marker
        let (col, row) = geometry.cell_at(210.0).unwrap();
        app.handle_mouse(click_at(col, row), NOW);
        assert_eq!(app.state.active_index(), 3);

        settle(&mut app);
        assert_eq!(app.state.active_period().title, "The Web");
    }

    #[test]
    fn test_click_dial_centre_does_nothing() {
        let mut app = create_test_app();
        let layout = ScreenLayout::new(app.area);
        let (col, row) = DialGeometry::new(layout.dial).center();
        app.handle_mouse(click_at(col, row), NOW);
        assert_eq!(app.state.active_index(), 0);
        assert!(!app.state.is_animating());
    }

    #[test]
    fn test_scroll_wheel_moves_events() {
        let mut app = create_test_app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(scroll, NOW);
        settle(&mut app);
        assert_eq!(app.state.carousel().track().target_index(), 1);
    }

    fn moved_at(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_pointer_motion_keeps_animations_running() {
        let mut app = create_test_app();
        app.handle_action(Action::Last, NOW);

        let mut last_from = app.state.years().from;
        for (i, t) in [100, 200, 300].into_iter().enumerate() {
            let column = u16::try_from(i).unwrap();
            assert!(app.handle_event(&moved_at(column, 3), Duration::from_millis(t)));
            let from = app.state.years().from;
            assert!(from > last_from);
            last_from = from;
        }

        app.handle_event(&moved_at(0, 0), Duration::from_millis(10_000));
        assert!(!app.state.is_animating());
        assert_eq!(app.state.years().from, 2015);
    }

    #[test]
    fn test_idle_events_skip_redraw() {
        let mut app = create_test_app();
        assert!(!app.handle_event(&Event::Tick, NOW));
        assert!(!app.handle_event(&moved_at(5, 5), NOW));
        assert!(app.handle_event(&Event::Resize(100, 30), NOW));
    }

    #[test]
    fn test_key_event_starts_transition_and_redraws() {
        let mut app = create_test_app();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert!(app.handle_event(&Event::Key(right), NOW));
        assert_eq!(app.state.active_index(), 1);

        // ticks redraw while animating, including the one that settles it
        assert!(app.handle_event(&Event::Tick, Duration::from_millis(100)));
        assert!(app.handle_event(&Event::Tick, Duration::from_secs(10)));
        assert!(!app.handle_event(&Event::Tick, Duration::from_secs(11)));
    }

    #[test]
    fn test_resize_updates_area() {
        let mut app = create_test_app();
        assert_eq!(app.area, Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        app.resize(120, 40);
        assert_eq!(app.area, Rect::new(0, 0, 120, 40));
    }
}
