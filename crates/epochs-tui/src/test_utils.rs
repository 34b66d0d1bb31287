//! Test utilities for epochs-tui rendering tests.
//!
//! Helpers for building an app on the built-in timeline, rendering it into a
//! buffer and turning buffers into strings for comparison.

use crate::app::App;
use crate::theme::Theme;
use crate::ui;
use epochs_engine::{builtin_timeline, Config, TimelineState};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app on the built-in timeline at the default size.
pub fn create_test_app() -> App {
    let state = TimelineState::new(builtin_timeline(), &Config::default());
    App::new(
        state,
        Theme::default(),
        Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT),
    )
}

/// Convert a buffer to a string, one line per row with trailing spaces removed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the whole screen for `app` and return it as a string.
pub fn render_app_to_string(app: &App) -> String {
    let mut buffer = Buffer::empty(app.area);
    ui::render(app, app.area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.state.active_index(), 0);
        assert!(!app.show_help);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
