//! Full-screen rendering of the timeline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::layout::{is_too_small, ScreenLayout, MIN_HEIGHT, MIN_WIDTH};
use crate::theme::Theme;
use crate::widgets::{
    Controls, DialWidget, EventStrip, FooterHints, Heading, HelpOverlay, YearsLabel,
};

/// Render the whole screen for `app`.
pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    Block::default()
        .style(Style::default().bg(theme.base).fg(theme.text))
        .render(area, buf);

    if is_too_small(area) {
        render_too_small(area, buf, theme);
        return;
    }

    let layout = ScreenLayout::new(area);
    let view = app.state.view();

    Heading::new(view.heading, theme).render(layout.heading, buf);
    DialWidget::new(&view.dots, theme).render(layout.dial, buf);
    YearsLabel::new(view.years, theme).render(layout.dial, buf);
    Controls::new(&view.counter, theme)
        .can_go_back(view.can_go_back)
        .can_go_forward(view.can_go_forward)
        .render(layout.controls, buf);
    EventStrip::new(&view, theme).render(layout.events, buf);

    let hints = FooterHints::default_hints();
    FooterHints::new(&hints, theme)
        .label(view.period_title)
        .render(layout.footer, buf);

    if app.show_help {
        HelpOverlay::new(theme).render(area, buf);
    }
}

fn render_too_small(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let message = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "Need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}",
            area.width, area.height
        )),
    ];
    Paragraph::new(message)
        .style(Style::default().fg(theme.subtext))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
