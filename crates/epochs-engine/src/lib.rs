//! epochs-engine: Headless core of the epochs historical timeline
//!
//! This crate provides everything that is not drawing, including:
//! - The period/event data model and JSON loading
//! - Active period selection with clamping
//! - Tweens with cancellable handles, year counters, the event carousel
//!   fade sequence and the rotating dot dial
//! - Configuration

pub mod animation;
pub mod carousel;
pub mod config;
pub mod data;
pub mod dial;
pub mod easing;
pub mod period;
pub mod selector;
pub mod state;
pub mod years;

// Re-export commonly used types
pub use animation::{sample, AnimatedValue, AnimationHandle, Frame, Tween};
pub use carousel::{CarouselPhase, CarouselTimings, EventCarousel, SlideTrack};
pub use config::{AnimationConfig, CarouselConfig, Config, ConfigError, DialConfig, CONFIG_FILE};
pub use data::{builtin_periods, builtin_timeline};
pub use dial::{dot_angle, normalize_degrees, point_on_circle, Dial, Dot, REFERENCE_ANGLE};
pub use easing::Easing;
pub use period::{Event, Period, Timeline, TimelineError, DEFAULT_TITLE};
pub use selector::{Direction, IndexChange, PeriodSelector};
pub use state::{format_counter, TimelineState, TimelineView};
pub use years::{round_half_up, YearAnimator, YearCounter, YearRange};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
