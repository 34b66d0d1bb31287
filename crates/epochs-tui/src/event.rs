//! Event handling for the epochs TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::warn;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Frame clock; fires every tick regardless of input.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// How often the input thread checks whether the loop has gone away.
const INPUT_POLL: Duration = Duration::from_millis(250);

/// Merges terminal input with a fixed-rate frame clock.
pub struct EventHandler {
    input: mpsc::UnboundedReceiver<Event>,
    ticker: Interval,
}

impl EventHandler {
    /// Read terminal input on a background thread and tick every `tick_rate`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // crossterm reads block, so they get their own thread
        std::thread::spawn(move || {
            while !tx.is_closed() {
                match event::poll(INPUT_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        warn!(error = %e, "terminal input poll failed");
                        break;
                    }
                }
                let event = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!(error = %e, "terminal input read failed");
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self::from_channel(rx, tick_rate)
    }

    /// Tick every `tick_rate` alongside events arriving on `input`.
    pub(crate) fn from_channel(input: mpsc::UnboundedReceiver<Event>, tick_rate: Duration) -> Self {
        let mut ticker = time::interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { input, ticker }
    }

    /// Get the next event. A due tick wins over queued input, so a stream
    /// of mouse moves cannot stall the frame clock.
    pub async fn next(&mut self) -> Option<Event> {
        tokio::select! {
            biased;
            _ = self.ticker.tick() => Some(Event::Tick),
            event = self.input.recv() => event,
        }
    }
}

/// What a key press asks the timeline to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    PrevPeriod,
    NextPeriod,
    /// Jump to a zero-based period index.
    Jump(usize),
    First,
    Last,
    EventsPrev,
    EventsNext,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Left | KeyCode::Char('h') => Action::PrevPeriod,
        KeyCode::Right | KeyCode::Char('l') => Action::NextPeriod,
        KeyCode::Home => Action::First,
        KeyCode::End => Action::Last,
        KeyCode::Char('[' | ',') => Action::EventsPrev,
        KeyCode::Char(']' | '.') => Action::EventsNext,
        KeyCode::Char(c @ '1'..='9') => {
            // '1' is the first period
            Action::Jump(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_period_keys() {
        assert_eq!(key_to_action(key(KeyCode::Left)), Action::PrevPeriod);
        assert_eq!(key_to_action(key(KeyCode::Char('h'))), Action::PrevPeriod);
        assert_eq!(key_to_action(key(KeyCode::Right)), Action::NextPeriod);
        assert_eq!(key_to_action(key(KeyCode::Char('l'))), Action::NextPeriod);
        assert_eq!(key_to_action(key(KeyCode::Home)), Action::First);
        assert_eq!(key_to_action(key(KeyCode::End)), Action::Last);
    }

    #[test]
    fn test_digit_keys_jump() {
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::Jump(0));
        assert_eq!(key_to_action(key(KeyCode::Char('9'))), Action::Jump(8));
        assert_eq!(key_to_action(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_event_strip_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('['))), Action::EventsPrev);
        assert_eq!(key_to_action(key(KeyCode::Char(','))), Action::EventsPrev);
        assert_eq!(key_to_action(key(KeyCode::Char(']'))), Action::EventsNext);
        assert_eq!(key_to_action(key(KeyCode::Char('.'))), Action::EventsNext);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Back);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(key_to_action(key(KeyCode::Char('?'))), Action::Help);
    }

    fn moved() -> Event {
        Event::Mouse(MouseEvent {
            kind: crossterm::event::MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[tokio::test]
    async fn test_tick_not_starved_by_queued_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        for _ in 0..1000 {
            tx.send(moved()).unwrap();
        }
        let mut events = EventHandler::from_channel(rx, Duration::from_millis(1));

        // the first tick is due immediately
        assert!(matches!(events.next().await, Some(Event::Tick)));

        time::sleep(Duration::from_millis(5)).await;
        assert!(matches!(events.next().await, Some(Event::Tick)));
    }

    #[tokio::test]
    async fn test_input_passes_through() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_channel(rx, Duration::from_secs(3600));
        assert!(matches!(events.next().await, Some(Event::Tick)));

        tx.send(Event::Resize(100, 40)).unwrap();
        assert!(matches!(events.next().await, Some(Event::Resize(100, 40))));

        drop(tx);
        assert!(events.next().await.is_none());
    }
}
