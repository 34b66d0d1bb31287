//! Animated year counters.
//!
//! Each counter remembers the last target it was sent to. A new target starts
//! a tween from that remembered value, not from whatever frame happens to be
//! on screen, and the remembered value is updated as soon as the tween starts.
//! Changing periods quickly therefore re-targets cleanly instead of stacking
//! transitions.

use std::time::Duration;

use crate::animation::{AnimatedValue, AnimationHandle, Tween};
use crate::easing::Easing;
use crate::period::Period;

/// Round to the nearest integer, halves rounding up.
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// One displayed year number.
#[derive(Debug, Clone)]
pub struct YearCounter {
    shown: AnimatedValue,
    last_target: i32,
}

impl YearCounter {
    pub fn new(year: i32) -> Self {
        Self {
            shown: AnimatedValue::new(f64::from(year)),
            last_target: year,
        }
    }

    /// Animate from the previous target to `year`.
    pub fn retarget(
        &mut self,
        year: i32,
        now: Duration,
        duration: Duration,
        easing: Easing,
    ) -> AnimationHandle {
        let tween = Tween::new(f64::from(self.last_target), f64::from(year), duration)
            .starting_at(now)
            .easing(easing);
        self.last_target = year;
        self.shown.animate(tween)
    }

    pub fn tick(&mut self, now: Duration) {
        self.shown.tick(now);
    }

    /// Rounded value for display.
    pub fn display(&self) -> i32 {
        round_half_up(self.shown.value())
    }

    pub fn last_target(&self) -> i32 {
        self.last_target
    }

    pub fn is_animating(&self) -> bool {
        self.shown.is_animating()
    }
}

/// Displayed "from" and "to" years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

/// Drives both year counters from period changes.
#[derive(Debug, Clone)]
pub struct YearAnimator {
    from: YearCounter,
    to: YearCounter,
    duration: Duration,
    easing: Easing,
}

impl YearAnimator {
    /// Start out showing `period`'s years without animating.
    pub fn new(period: &Period, duration: Duration, easing: Easing) -> Self {
        Self {
            from: YearCounter::new(period.from),
            to: YearCounter::new(period.to),
            duration,
            easing,
        }
    }

    /// React to the active period changing to `period`.
    pub fn on_period_change(&mut self, period: &Period, now: Duration) {
        self.from
            .retarget(period.from, now, self.duration, self.easing);
        self.to.retarget(period.to, now, self.duration, self.easing);
    }

    pub fn tick(&mut self, now: Duration) {
        self.from.tick(now);
        self.to.tick(now);
    }

    pub fn display(&self) -> YearRange {
        YearRange {
            from: self.from.display(),
            to: self.to.display(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.from.is_animating() || self.to.is_animating()
    }
}
