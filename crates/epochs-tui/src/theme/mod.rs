//! Theme components for the TUI.
//!
//! [`Theme`] holds the colour palette (dark, light and high contrast) and
//! the opacity blending used by the event strip fades.

mod colors;

pub use colors::{fade, Theme};
