//! Tweening primitives.
//!
//! A [`Tween`] is a pure description of a transition: the value at any point
//! in time is a function of `(from, to, elapsed)` only. An [`AnimatedValue`]
//! owns the displayed value of one animated target and at most one running
//! tween. Starting a new tween on a target cancels the previous one: every
//! start hands out a fresh [`AnimationHandle`], and completions are reported
//! with the handle of the run that finished, so callers can tell a stale
//! completion from the one they are waiting for.

use std::time::Duration;

use crate::easing::Easing;

/// Value of a transition after `elapsed` time.
///
/// This is the whole animation model; everything else is bookkeeping.
pub fn sample(from: f64, to: f64, elapsed: Duration, duration: Duration, easing: Easing) -> f64 {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    };
    from + (to - from) * easing.apply(progress)
}

/// A single transition from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Clock time at which the tween was started.
    pub start: Duration,
    /// Wait before the value starts moving.
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// Create a tween starting at time zero with the default ease-out curve.
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            start: Duration::ZERO,
            delay: Duration::ZERO,
            duration,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn starting_at(mut self, start: Duration) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Clock time at which the value reaches `to`.
    pub fn end(&self) -> Duration {
        self.start + self.delay + self.duration
    }

    /// Interpolated value at clock time `now`.
    pub fn value_at(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.start + self.delay);
        sample(self.from, self.to, elapsed, self.duration, self.easing)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }
}

/// Identifies one run of an animation on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Result of advancing an [`AnimatedValue`] to a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Nothing is running.
    Idle,
    /// The value moved and the run is still in flight.
    Update(f64),
    /// The run identified by `handle` reached its target at clock time `at`.
    ///
    /// Reported exactly once per run.
    Complete { handle: AnimationHandle, at: Duration },
}

/// The displayed value of one animated target.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    running: Option<(AnimationHandle, Tween)>,
    generation: u64,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            running: None,
            generation: 0,
        }
    }

    /// Current displayed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the target is heading to (the current value when idle).
    pub fn target(&self) -> f64 {
        self.running.map_or(self.value, |(_, tween)| tween.to)
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Whether `handle` identifies the run currently in flight.
    pub fn is_current(&self, handle: AnimationHandle) -> bool {
        self.running.is_some_and(|(running, _)| running == handle)
    }

    /// Start `tween`, cancelling whatever was running.
    pub fn animate(&mut self, tween: Tween) -> AnimationHandle {
        self.generation += 1;
        let handle = AnimationHandle(self.generation);
        self.value = tween.value_at(tween.start);
        self.running = Some((handle, tween));
        handle
    }

    /// Retarget from the current value.
    pub fn animate_to(
        &mut self,
        target: f64,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> AnimationHandle {
        let tween = Tween::new(self.value, target, duration)
            .starting_at(now)
            .easing(easing);
        self.animate(tween)
    }

    /// Jump to `value`, cancelling whatever was running.
    pub fn set(&mut self, value: f64) {
        self.generation += 1;
        self.running = None;
        self.value = value;
    }

    /// Advance to clock time `now`.
    pub fn tick(&mut self, now: Duration) -> Frame {
        let Some((handle, tween)) = self.running else {
            return Frame::Idle;
        };

        if tween.is_finished(now) {
            self.value = tween.to;
            self.running = None;
            return Frame::Complete {
                handle,
                at: tween.end(),
            };
        }

        self.value = tween.value_at(now);
        Frame::Update(self.value)
    }
}
