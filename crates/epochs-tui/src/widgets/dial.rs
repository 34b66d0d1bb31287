//! Circle of period markers.
//!
//! Terminal cells are about twice as tall as they are wide, so the circle is
//! laid out in half-row units vertically: a radius of `r` spans `r` columns
//! but only `r / 2` rows.

use epochs_engine::{normalize_degrees, point_on_circle, Dot};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle},
        Widget,
    },
};

use super::put_clipped;
use crate::theme::Theme;

/// Columns kept free right of the circle for the active title.
const LABEL_ROOM: f64 = 16.0;
const MIN_RADIUS: f64 = 3.0;

/// Where the dial sits inside its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    area: Rect,
    radius: f64,
}

impl DialGeometry {
    pub fn new(area: Rect) -> Self {
        let by_height = f64::from(area.height) - 1.0;
        let by_width = f64::from(area.width) / 2.0 - LABEL_ROOM;
        Self {
            area,
            radius: by_height.min(by_width).max(MIN_RADIUS),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Centre cell.
    pub fn center(&self) -> (u16, u16) {
        (
            self.area.x + self.area.width / 2,
            self.area.y + self.area.height / 2,
        )
    }

    /// Cell of the marker at `angle`, if it falls inside the area.
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell_at(&self, angle: f64) -> Option<(u16, u16)> {
        let (cx, cy) = self.center();
        let (dx, dy) = point_on_circle(angle, self.radius);
        let col = (f64::from(cx) + dx).round() as i64;
        let row = (f64::from(cy) - dy / 2.0).round() as i64;

        let col = u16::try_from(col).ok()?;
        let row = u16::try_from(row).ok()?;
        let inside = col >= self.area.x
            && col < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        inside.then_some((col, row))
    }

    /// Angle of a click at `(col, row)`, if it is near the ring.
    pub fn angle_at(&self, col: u16, row: u16) -> Option<f64> {
        let (cx, cy) = self.center();
        let dx = f64::from(col) - f64::from(cx);
        let dy = (f64::from(cy) - f64::from(row)) * 2.0;
        let distance = dx.hypot(dy);
        if distance < self.radius * 0.5 || distance > self.radius * 1.5 + 1.0 {
            return None;
        }
        Some(normalize_degrees(dx.atan2(dy).to_degrees()))
    }
}

/// The dial: a ring with one marker per period.
pub struct DialWidget<'a> {
    dots: &'a [Dot],
    theme: &'a Theme,
}

impl<'a> DialWidget<'a> {
    pub fn new(dots: &'a [Dot], theme: &'a Theme) -> Self {
        Self { dots, theme }
    }

    fn render_dot(&self, dot: &Dot, geometry: &DialGeometry, area: Rect, buf: &mut Buffer) {
        let Some((col, row)) = geometry.cell_at(dot.display_angle) else {
            return;
        };
        let x = i32::from(col);

        if dot.active {
            let marker = Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD);
            put_clipped(buf, area, x, row, "◉ ", marker);
            if let Some(title) = &dot.title {
                let label = Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD);
                put_clipped(buf, area, x + 2, row, title, label);
            }
        } else {
            let ordinal = dot.ordinal.to_string();
            put_clipped(
                buf,
                area,
                x,
                row,
                &ordinal,
                Style::default().fg(self.theme.subtext),
            );
        }
    }
}

impl Widget for DialWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let geometry = DialGeometry::new(area);
        let half_width = f64::from(area.width) / 2.0;
        let half_height = f64::from(area.height);
        let ring = Circle {
            x: 0.0,
            y: 0.0,
            radius: geometry.radius(),
            color: self.theme.border,
        };
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(|ctx| ctx.draw(&ring))
            .render(area, buf);

        // Inactive first so the active title is never overdrawn
        for dot in self.dots.iter().filter(|d| !d.active) {
            self.render_dot(dot, &geometry, area, buf);
        }
        for dot in self.dots.iter().filter(|d| d.active) {
            self.render_dot(dot, &geometry, area, buf);
        }
    }
}
