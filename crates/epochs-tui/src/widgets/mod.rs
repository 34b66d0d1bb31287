//! UI widgets for the timeline.
//!
//! This module provides:
//! - [`Heading`] - Accent bar and timeline title
//! - [`YearsLabel`] - The animated from/to year pair
//! - [`DialWidget`] - Circle of period markers, with [`DialGeometry`] for hit-testing
//! - [`EventStrip`] - Horizontally scrolling event cards with fade
//! - [`Controls`] - Period arrows and the position counter
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`HelpOverlay`] - Key reference popup

mod controls;
mod dial;
mod events;
mod footer_hints;
mod heading;
mod help;
mod years;

pub use controls::Controls;
pub use dial::{DialGeometry, DialWidget};
pub use events::EventStrip;
pub use footer_hints::{FooterHints, KeyHint};
pub use heading::Heading;
pub use help::HelpOverlay;
pub use years::YearsLabel;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending with `…`
/// when anything was cut.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Write `text` starting at column `x` (which may be left of `clip`), keeping
/// only the cells that fall inside `clip`.
pub(crate) fn put_clipped(buf: &mut Buffer, clip: Rect, x: i32, y: u16, text: &str, style: Style) {
    if y < clip.y || y >= clip.bottom() {
        return;
    }

    let left = i32::from(clip.x);
    let right = i32::from(clip.right());
    let mut col = x;
    for ch in text.chars() {
        let w = i32::try_from(ch.width().unwrap_or(0)).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if col >= right {
            break;
        }
        if col >= left && col + w <= right {
            if let Some(cell) = u16::try_from(col).ok().and_then(|c| buf.cell_mut((c, y))) {
                cell.set_char(ch).set_style(style);
            }
        }
        col += w;
    }
}
