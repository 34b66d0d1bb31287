//! Circular dot navigation.
//!
//! Markers sit on a circle with the active one pinned to a reference angle.
//! Angles are in degrees, clockwise from 12 o'clock.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::animation::AnimatedValue;
use crate::easing::Easing;
use crate::period::Timeline;

/// Angle of the active marker.
pub const REFERENCE_ANGLE: f64 = 30.0;

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Angular distance between neighbouring markers.
#[allow(clippy::cast_precision_loss)]
pub fn step_degrees(count: NonZeroUsize) -> f64 {
    360.0 / count.get() as f64
}

/// Resting angle of marker `index` when `active` is selected.
#[allow(clippy::cast_precision_loss)]
pub fn dot_angle(index: usize, active: usize, count: NonZeroUsize, reference: f64) -> f64 {
    let delta = index as f64 - active as f64;
    normalize_degrees(reference + delta * step_degrees(count))
}

/// Point at `angle` on a circle of `radius` centred on the origin (y up).
pub fn point_on_circle(angle: f64, radius: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (radius * radians.sin(), radius * radians.cos())
}

/// A marker ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub index: usize,
    /// 1-based number shown on the marker.
    pub ordinal: usize,
    /// Resting angle; the active marker is always at the reference angle.
    pub angle: f64,
    /// Where the marker is drawn while the wheel turns. Equals `angle` at rest.
    pub display_angle: f64,
    pub active: bool,
    /// Period title, only present on the active marker.
    pub title: Option<String>,
}

/// Rotating wheel of period markers.
#[derive(Debug, Clone)]
pub struct Dial {
    rotation: AnimatedValue,
    count: NonZeroUsize,
    reference: f64,
    duration: Duration,
    easing: Easing,
}

impl Dial {
    pub fn new(count: NonZeroUsize, reference: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            rotation: AnimatedValue::new(0.0),
            count,
            reference,
            duration,
            easing,
        }
    }

    /// Rotate the wheel so `active` ends up on the reference angle.
    #[allow(clippy::cast_precision_loss)]
    pub fn on_period_change(&mut self, active: usize, now: Duration) {
        let target = -(active as f64) * step_degrees(self.count);
        self.rotation
            .animate_to(target, self.duration, self.easing, now);
    }

    pub fn tick(&mut self, now: Duration) {
        self.rotation.tick(now);
    }

    /// Current wheel rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn is_animating(&self) -> bool {
        self.rotation.is_animating()
    }

    /// Markers for every period, with `active` selected.
    #[allow(clippy::cast_precision_loss)]
    pub fn dots(&self, active: usize, timeline: &Timeline) -> Vec<Dot> {
        let step = step_degrees(self.count);
        timeline
            .periods()
            .iter()
            .enumerate()
            .map(|(index, period)| {
                let angle = dot_angle(index, active, self.count, self.reference);
                let display_angle = if self.rotation.is_animating() {
                    normalize_degrees(self.reference + index as f64 * step + self.rotation())
                } else {
                    angle
                };
                let is_active = index == active;
                Dot {
                    index,
                    ordinal: index + 1,
                    angle,
                    display_angle,
                    active: is_active,
                    title: is_active.then(|| period.title.clone()),
                }
            })
            .collect()
    }

    /// Index of the marker drawn closest to `angle`.
    pub fn nearest(&self, angle: f64, active: usize, timeline: &Timeline) -> Option<usize> {
        self.dots(active, timeline)
            .into_iter()
            .map(|dot| {
                let diff = normalize_degrees(dot.display_angle - angle);
                (dot.index, diff.min(360.0 - diff))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn timeline(n: usize) -> Timeline {
        let periods = (0..n)
            .map(|i| {
                let start = 1900 + i32::try_from(i).unwrap() * 10;
                Period::new(start, start + 9, format!("P{i}"))
            })
            .collect();
        Timeline::new(periods).unwrap()
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(390.0) - 30.0).abs() < 1e-9);
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-9);
        assert!(normalize_degrees(360.0).abs() < 1e-9);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_active_dot_sits_on_reference() {
        for active in 0..6 {
            let angle = dot_angle(active, active, count(6), REFERENCE_ANGLE);
            assert!((angle - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dot_spacing() {
        // 6 periods, 60 degrees apart
        assert!((dot_angle(1, 0, count(6), REFERENCE_ANGLE) - 90.0).abs() < 1e-9);
        assert!((dot_angle(0, 1, count(6), REFERENCE_ANGLE) - 330.0).abs() < 1e-9);
        assert!((dot_angle(5, 0, count(6), REFERENCE_ANGLE) - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_on_circle_orientation() {
        let (x, y) = point_on_circle(0.0, 10.0);
        assert!(x.abs() < 1e-9 && (y - 10.0).abs() < 1e-9);

        let (x, y) = point_on_circle(90.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_dots_labels() {
        let tl = timeline(4);
        let dial = Dial::new(count(4), REFERENCE_ANGLE, ms(600), Easing::EaseOut);
        let dots = dial.dots(2, &tl);

        assert_eq!(dots.len(), 4);
        assert_eq!(dots[2].title.as_deref(), Some("P2"));
        assert!(dots[2].active);
        assert_eq!(dots[0].ordinal, 1);
        assert!(dots.iter().filter(|d| !d.active).all(|d| d.title.is_none()));
    }

    #[test]
    fn test_wheel_rotation_settles_on_formula() {
        let tl = timeline(6);
        let mut dial = Dial::new(count(6), REFERENCE_ANGLE, ms(600), Easing::EaseOut);
        dial.on_period_change(3, ms(0));

        dial.tick(ms(300));
        assert!(dial.is_animating());
        let moving = dial.dots(3, &tl);
        assert!((moving[3].display_angle - 30.0).abs() > 1.0);

        dial.tick(ms(600));
        assert!(!dial.is_animating());
        assert!((dial.rotation() + 180.0).abs() < 1e-9);
        for dot in dial.dots(3, &tl) {
            let expected = dot_angle(dot.index, 3, count(6), REFERENCE_ANGLE);
            assert!((dot.angle - expected).abs() < 1e-9);
            assert!((dot.display_angle - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_active_angle_pinned_during_rotation() {
        let tl = timeline(6);
        let mut dial = Dial::new(count(6), REFERENCE_ANGLE, ms(600), Easing::EaseOut);
        dial.on_period_change(3, ms(0));

        for t in (0..=600).step_by(50) {
            dial.tick(ms(t));
            for dot in dial.dots(3, &tl) {
                let expected = dot_angle(dot.index, 3, count(6), REFERENCE_ANGLE);
                assert!((dot.angle - expected).abs() < 1e-9, "dot {} at {t} ms", dot.index);
            }
            let active = &dial.dots(3, &tl)[3];
            assert!((active.angle - REFERENCE_ANGLE).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nearest_follows_drawn_position() {
        let tl = timeline(6);
        let mut dial = Dial::new(count(6), REFERENCE_ANGLE, ms(600), Easing::EaseOut);
        dial.on_period_change(3, ms(0));
        dial.tick(ms(100));

        let drawn = dial.dots(3, &tl)[0].display_angle;
        assert_eq!(dial.nearest(drawn, 3, &tl), Some(0));
    }

    #[test]
    fn test_nearest_marker() {
        let tl = timeline(6);
        let dial = Dial::new(count(6), REFERENCE_ANGLE, ms(600), Easing::EaseOut);
        assert_eq!(dial.nearest(35.0, 0, &tl), Some(0));
        assert_eq!(dial.nearest(95.0, 0, &tl), Some(1));
        assert_eq!(dial.nearest(335.0, 0, &tl), Some(5));
    }
}
