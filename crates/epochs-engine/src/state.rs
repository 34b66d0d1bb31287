//! Timeline widget state.
//!
//! [`TimelineState`] owns everything that changes while the widget is on
//! screen. User input goes through [`TimelineState::advance`] and
//! [`TimelineState::jump_to`]; when the active index actually moves, the year
//! counters, the event carousel and the dial each start their own transition.
//! Time is passed in explicitly as the elapsed [`Duration`] of the widget
//! clock, so the whole state is a deterministic function of its inputs.

use std::time::Duration;

use tracing::debug;

use crate::carousel::EventCarousel;
use crate::config::Config;
use crate::dial::{Dial, Dot};
use crate::period::{Event, Period, Timeline};
use crate::selector::{Direction, IndexChange, PeriodSelector};
use crate::years::{YearAnimator, YearRange};

/// Position label such as `01/12`.
pub fn format_counter(index: usize, total: usize) -> String {
    format!("{:02}/{:02}", index + 1, total)
}

/// Render-ready snapshot of the widget.
#[derive(Debug, Clone)]
pub struct TimelineView<'a> {
    pub heading: &'a str,
    pub active: usize,
    pub period_title: &'a str,
    pub years: YearRange,
    pub counter: String,
    pub dots: Vec<Dot>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Events of the period currently shown in the strip.
    pub events: &'a [Event],
    pub events_opacity: f64,
    pub events_offset: f64,
    /// Fractional index of the first visible event card.
    pub strip_position: f64,
    pub strip_can_prev: bool,
    pub strip_can_next: bool,
    pub slides_per_view: usize,
}

/// State of one timeline widget.
#[derive(Debug, Clone)]
pub struct TimelineState {
    timeline: Timeline,
    selector: PeriodSelector,
    years: YearAnimator,
    carousel: EventCarousel,
    dial: Dial,
}

impl TimelineState {
    /// Create the widget state on the first period, fully settled.
    pub fn new(timeline: Timeline, config: &Config) -> Self {
        let timeline = match &config.title {
            Some(title) => timeline.with_title(title.clone()),
            None => timeline,
        };
        let animation = &config.animation;
        let first = timeline.period(0);

        let years = YearAnimator::new(first, animation.year_duration(), animation.easing);
        let carousel = EventCarousel::new(
            0,
            first.events.len(),
            config.carousel.slides_per_view,
            animation.carousel_timings(),
        );
        let dial = Dial::new(
            timeline.count(),
            config.dial.reference_angle,
            animation.dial_duration(),
            animation.easing,
        );

        Self {
            selector: PeriodSelector::new(timeline.count()),
            timeline,
            years,
            carousel,
            dial,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn active_index(&self) -> usize {
        self.selector.index()
    }

    pub fn active_period(&self) -> &Period {
        self.timeline.period(self.selector.index())
    }

    /// Step one period forward or back. Returns whether the index moved.
    pub fn advance(&mut self, direction: Direction, now: Duration) -> bool {
        let change = self.selector.advance(direction);
        self.apply(change, now)
    }

    /// Jump to the period at `index` (clamped). Returns whether the index moved.
    pub fn jump_to(&mut self, index: i64, now: Duration) -> bool {
        let change = self.selector.jump_to(index);
        self.apply(change, now)
    }

    fn apply(&mut self, change: Option<IndexChange>, now: Duration) -> bool {
        let Some(change) = change else {
            return false;
        };

        // Retarget from up-to-date values
        self.tick(now);
        debug!(
            previous = change.previous,
            current = change.current,
            "active period changed"
        );

        let period = self.timeline.period(change.current);
        self.years.on_period_change(period, now);
        self.carousel
            .on_period_change(change.current, period.events.len(), now);
        self.dial.on_period_change(change.current, now);
        true
    }

    /// Scroll the event strip one card forward.
    pub fn events_next(&mut self, now: Duration) {
        self.tick(now);
        self.carousel.events_next(now);
    }

    /// Scroll the event strip one card back.
    pub fn events_prev(&mut self, now: Duration) {
        self.tick(now);
        self.carousel.events_prev(now);
    }

    /// Advance every animation to clock time `now`.
    pub fn tick(&mut self, now: Duration) {
        self.years.tick(now);
        self.carousel.tick(now);
        self.dial.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.years.is_animating() || self.carousel.is_animating() || self.dial.is_animating()
    }

    pub fn years(&self) -> YearRange {
        self.years.display()
    }

    pub fn carousel(&self) -> &EventCarousel {
        &self.carousel
    }

    pub fn dial(&self) -> &Dial {
        &self.dial
    }

    pub fn counter_label(&self) -> String {
        format_counter(self.selector.index(), self.timeline.count().get())
    }

    /// Index of the marker nearest to `angle` degrees.
    pub fn dot_at_angle(&self, angle: f64) -> Option<usize> {
        self.dial
            .nearest(angle, self.selector.index(), &self.timeline)
    }

    /// Everything the renderer needs for one frame.
    pub fn view(&self) -> TimelineView<'_> {
        let active = self.selector.index();
        let shown = self.timeline.period(self.carousel.shown_period());
        let track = self.carousel.track();

        TimelineView {
            heading: self.timeline.title(),
            active,
            period_title: &self.active_period().title,
            years: self.years.display(),
            counter: self.counter_label(),
            dots: self.dial.dots(active, &self.timeline),
            can_go_back: self.selector.can_go_back(),
            can_go_forward: self.selector.can_go_forward(),
            events: &shown.events,
            events_opacity: self.carousel.opacity(),
            events_offset: self.carousel.offset(),
            strip_position: track.position(),
            strip_can_prev: track.can_slide_prev(),
            strip_can_next: track.can_slide_next(),
            slides_per_view: track.per_view(),
        }
    }
}
