//! Key reference popup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_fixed;
use crate::theme::Theme;

const HELP_TEXT: &str = r"
  Periods
    ←/h  →/l          Previous/next period
    1-9               Jump to period
    Home/End          First/last period
    Click a marker    Jump to it

  Events
    ,/[  ./]          Scroll events
    Mouse wheel       Scroll events

  ?                   Toggle this help
  q/Esc               Quit

  [Press any key to close]
";

/// Help overlay drawn over the centre of the screen.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 50.min(area.width.saturating_sub(4));
        let height = 19.min(area.height.saturating_sub(2));
        let overlay_area = centered_fixed(width, height, area);

        Clear.render(overlay_area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface).fg(self.theme.text));

        Paragraph::new(HELP_TEXT)
            .block(block)
            .render(overlay_area, buf);
    }
}
