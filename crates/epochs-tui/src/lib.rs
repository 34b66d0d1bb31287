//! epochs-tui: Terminal UI for the epochs historical timeline
//!
//! This crate draws a [`TimelineState`] with ratatui, including:
//! - The animated year counters inside a dial of period markers
//! - Period arrows, the position counter and the fading event strip
//! - Key and mouse handling (markers and arrows are clickable)

mod app;
mod event;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod ui;
mod widgets;

pub use app::App;
pub use epochs_engine;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use layout::{MIN_HEIGHT, MIN_WIDTH};
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use epochs_engine::{Config, TimelineState};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, stdout};
use std::time::Instant;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit (also on error).
pub async fn run_tui(
    state: TimelineState,
    config: &Config,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(state, theme, Rect::new(0, 0, size.width, size.height));
    info!(
        periods = app.state.timeline().count().get(),
        width = size.width,
        height = size.height,
        "starting tui"
    );

    let mut events = EventHandler::new(config.tick_rate());

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| {
                let area = frame.area();
                ui::render(app, area, frame.buffer_mut());
            })?;
        }

        let Some(event) = events.next().await else {
            break;
        };
        needs_redraw = app.handle_event(&event, clock.elapsed());

        if app.should_quit {
            info!("quitting");
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
