//! Footer status bar widget.
//!
//! Format: `Space                [←/→] period │ [1-9] jump │ [?] help │ [q] quit`
//!
//! The left side names the active period, the right side lists the keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "←/→", "q").
    pub key: String,
    /// The action description (e.g., "period", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    label: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            label: None,
        }
    }

    /// Text shown on the left.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// The hints shown on the timeline screen.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "period"),
            KeyHint::new("1-9", "jump"),
            KeyHint::new(",/.", "events"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(label) = self.label {
            left_spans.push(Span::styled(label, Style::default().fg(self.theme.primary)));
        }

        // Right side: hints (rendered right-aligned)
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }

            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.text),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let total_width = usize::from(area.width);

        let padding = total_width.saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        let paragraph =
            Paragraph::new(Line::from(left_spans)).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use insta::assert_snapshot;

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("q", "quit");
        assert_eq!(hint.key, "q");
        assert_eq!(hint.action, "quit");
    }

    #[test]
    fn test_footer_right_aligns_hints() {
        let theme = Theme::default();
        let hints = FooterHints::default_hints();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .label("Space")
            .render(area, &mut buf);
        assert_snapshot!(
            buffer_to_string(&buf),
            @"Space             [←/→] period │ [1-9] jump │ [,/.] events │ [?] help │ [q] quit"
        );
    }

    #[test]
    fn test_footer_without_label() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("?", "help")];
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "            [?] help");
    }
}
