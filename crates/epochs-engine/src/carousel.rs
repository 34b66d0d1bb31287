//! Event carousel coordination.
//!
//! On every period change the event strip fades out, swaps to the new
//! period's events and scrolls back to the first one, then fades in again:
//!
//! ```text
//!  Visible --change--> FadingOut --complete--> FadingIn --complete--> Visible
//!                        ^   |                    |
//!                        +---+----- change -------+
//! ```
//!
//! A change in any phase restarts the fade-out from the values currently on
//! screen. Only the most recent change is honored; the coordinator waits on
//! the handle of the run it started last and ignores any other completion.

use std::time::Duration;

use tracing::debug;

use crate::animation::{AnimatedValue, AnimationHandle, Frame, Tween};
use crate::easing::Easing;

/// Durations and distances used by the fade sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTimings {
    pub fade_out: Duration,
    pub slide: Duration,
    /// Wait between the reset starting and the fade-in starting.
    pub fade_in_delay: Duration,
    pub fade_in: Duration,
    /// Vertical offset of the strip when fully faded out.
    pub offset: f64,
    pub easing: Easing,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(300),
            slide: Duration::from_millis(300),
            fade_in_delay: Duration::from_millis(150),
            fade_in: Duration::from_millis(400),
            offset: 20.0,
            easing: Easing::EaseOut,
        }
    }
}

/// Horizontally scrollable row of slides.
///
/// The position is fractional while a slide transition runs and is always
/// kept within `0..=max_start`.
#[derive(Debug, Clone)]
pub struct SlideTrack {
    position: AnimatedValue,
    len: usize,
    per_view: usize,
}

impl SlideTrack {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            position: AnimatedValue::new(0.0),
            len,
            per_view: per_view.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Largest index the first visible slide can have.
    pub fn max_start(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Fractional index of the first visible slide.
    pub fn position(&self) -> f64 {
        self.position.value()
    }

    /// Index the track is at, or heading to.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn target_index(&self) -> usize {
        let target = self.position.target().round().max(0.0) as usize;
        target.min(self.max_start())
    }

    pub fn can_slide_prev(&self) -> bool {
        self.target_index() > 0
    }

    pub fn can_slide_next(&self) -> bool {
        self.target_index() < self.max_start()
    }

    /// Replace the slide count, pulling the position back into range.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let max = self.max_start() as f64;
        if self.position.value() > max || self.position.target() > max {
            self.position.set(self.position.value().min(max));
        }
    }

    /// Slide so that `index` is the first visible slide.
    #[allow(clippy::cast_precision_loss)]
    pub fn slide_to(
        &mut self,
        index: usize,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> AnimationHandle {
        let target = index.min(self.max_start()) as f64;
        self.position.animate_to(target, duration, easing, now)
    }

    pub fn next(&mut self, duration: Duration, easing: Easing, now: Duration) {
        if self.can_slide_next() {
            let index = self.target_index() + 1;
            self.slide_to(index, duration, easing, now);
        }
    }

    pub fn prev(&mut self, duration: Duration, easing: Easing, now: Duration) {
        if self.can_slide_prev() {
            let index = self.target_index() - 1;
            self.slide_to(index, duration, easing, now);
        }
    }

    pub fn tick(&mut self, now: Duration) -> Frame {
        self.position.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }
}

/// Where the coordinator is in the fade sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselPhase {
    /// Fully shown, nothing pending.
    #[default]
    Visible,
    /// Fading out the previous content.
    FadingOut,
    /// Reset done, fading the new content in.
    FadingIn,
}

#[derive(Debug, Clone, Copy)]
struct PendingReset {
    period: usize,
    len: usize,
}

/// Keeps the event strip in step with the active period.
#[derive(Debug, Clone)]
pub struct EventCarousel {
    opacity: AnimatedValue,
    offset: AnimatedValue,
    track: SlideTrack,
    phase: CarouselPhase,
    shown_period: usize,
    pending: Option<PendingReset>,
    awaiting: Option<AnimationHandle>,
    timings: CarouselTimings,
}

impl EventCarousel {
    /// Start out fully visible on `period` with `len` events.
    pub fn new(period: usize, len: usize, per_view: usize, timings: CarouselTimings) -> Self {
        Self {
            opacity: AnimatedValue::new(1.0),
            offset: AnimatedValue::new(0.0),
            track: SlideTrack::new(len, per_view),
            phase: CarouselPhase::Visible,
            shown_period: period,
            pending: None,
            awaiting: None,
            timings,
        }
    }

    /// React to the active period changing to `period` with `len` events.
    pub fn on_period_change(&mut self, period: usize, len: usize, now: Duration) {
        let t = self.timings;
        debug!(period, from = ?self.phase, "event carousel fading out");

        self.pending = Some(PendingReset { period, len });
        let handle = self.opacity.animate_to(0.0, t.fade_out, t.easing, now);
        self.offset.animate_to(t.offset, t.fade_out, t.easing, now);
        self.awaiting = Some(handle);
        self.phase = CarouselPhase::FadingOut;
    }

    /// Advance every animation to clock time `now`.
    pub fn tick(&mut self, now: Duration) {
        self.track.tick(now);
        self.offset.tick(now);

        if let Frame::Complete { handle, at } = self.opacity.tick(now) {
            if self.awaiting == Some(handle) {
                self.on_complete(at, now);
            }
        }
    }

    fn on_complete(&mut self, at: Duration, now: Duration) {
        match self.phase {
            CarouselPhase::FadingOut => {
                self.reset(at);
                // The fade-in may already be due if ticks are sparse
                self.tick(now);
            }
            CarouselPhase::FadingIn => {
                debug!(period = self.shown_period, "event carousel visible");
                self.phase = CarouselPhase::Visible;
                self.awaiting = None;
            }
            CarouselPhase::Visible => {}
        }
    }

    /// Swap to the pending period, scroll home and schedule the fade-in.
    fn reset(&mut self, at: Duration) {
        let t = self.timings;

        if let Some(pending) = self.pending.take() {
            self.shown_period = pending.period;
            self.track.set_len(pending.len);
        }
        self.track.slide_to(0, t.slide, t.easing, at);

        let fade_in = Tween::new(0.0, 1.0, t.fade_in)
            .starting_at(at)
            .delay(t.fade_in_delay)
            .easing(t.easing);
        let handle = self.opacity.animate(fade_in);
        let rise = Tween::new(t.offset, 0.0, t.fade_in)
            .starting_at(at)
            .delay(t.fade_in_delay)
            .easing(t.easing);
        self.offset.animate(rise);

        debug!(period = self.shown_period, "event carousel reset");
        self.awaiting = Some(handle);
        self.phase = CarouselPhase::FadingIn;
    }

    pub fn events_next(&mut self, now: Duration) {
        self.track.next(self.timings.slide, self.timings.easing, now);
    }

    pub fn events_prev(&mut self, now: Duration) {
        self.track.prev(self.timings.slide, self.timings.easing, now);
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Period whose events are on screen.
    pub fn shown_period(&self) -> usize {
        self.shown_period
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value().clamp(0.0, 1.0)
    }

    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    pub fn track(&self) -> &SlideTrack {
        &self.track
    }

    pub fn is_animating(&self) -> bool {
        self.phase != CarouselPhase::Visible
            || self.opacity.is_animating()
            || self.offset.is_animating()
            || self.track.is_animating()
    }
}
