//! Configuration types for the epochs engine.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::carousel::CarouselTimings;
use crate::dial::REFERENCE_ANGLE;
use crate::easing::Easing;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "epochs.json";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Heading override (the periods file's title otherwise).
    #[serde(default)]
    pub title: Option<String>,

    /// Periods file to load instead of the built-in set.
    #[serde(default)]
    pub periods_file: Option<PathBuf>,

    /// Interval between animation ticks in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub dial: DialConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,
}

fn default_tick_rate_ms() -> u64 {
    16
}

/// Transition timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Year counter transition.
    #[serde(default = "default_year_ms")]
    pub year_ms: u64,

    /// Dial rotation.
    #[serde(default = "default_dial_ms")]
    pub dial_ms: u64,

    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,

    /// Event strip scroll back to the first event.
    #[serde(default = "default_slide_ms")]
    pub slide_ms: u64,

    #[serde(default = "default_fade_in_delay_ms")]
    pub fade_in_delay_ms: u64,

    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,

    /// Vertical offset of the event strip when faded out.
    #[serde(default = "default_fade_offset")]
    pub fade_offset: f64,

    #[serde(default)]
    pub easing: Easing,
}

fn default_year_ms() -> u64 {
    600
}

fn default_dial_ms() -> u64 {
    600
}

fn default_fade_out_ms() -> u64 {
    300
}

fn default_slide_ms() -> u64 {
    300
}

fn default_fade_in_delay_ms() -> u64 {
    150
}

fn default_fade_in_ms() -> u64 {
    400
}

fn default_fade_offset() -> f64 {
    20.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            year_ms: default_year_ms(),
            dial_ms: default_dial_ms(),
            fade_out_ms: default_fade_out_ms(),
            slide_ms: default_slide_ms(),
            fade_in_delay_ms: default_fade_in_delay_ms(),
            fade_in_ms: default_fade_in_ms(),
            fade_offset: default_fade_offset(),
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    pub fn year_duration(&self) -> Duration {
        Duration::from_millis(self.year_ms)
    }

    pub fn dial_duration(&self) -> Duration {
        Duration::from_millis(self.dial_ms)
    }

    /// Timings for the event carousel fade sequence.
    pub fn carousel_timings(&self) -> CarouselTimings {
        CarouselTimings {
            fade_out: Duration::from_millis(self.fade_out_ms),
            slide: Duration::from_millis(self.slide_ms),
            fade_in_delay: Duration::from_millis(self.fade_in_delay_ms),
            fade_in: Duration::from_millis(self.fade_in_ms),
            offset: self.fade_offset,
            easing: self.easing,
        }
    }
}

/// Dot dial settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialConfig {
    /// Angle of the active marker, clockwise from 12 o'clock.
    #[serde(default = "default_reference_angle")]
    pub reference_angle: f64,
}

fn default_reference_angle() -> f64 {
    REFERENCE_ANGLE
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            reference_angle: default_reference_angle(),
        }
    }
}

/// Event strip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of event cards visible at once.
    #[serde(default = "default_slides_per_view")]
    pub slides_per_view: usize,
}

fn default_slides_per_view() -> usize {
    3
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_per_view: default_slides_per_view(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            periods_file: None,
            tick_rate_ms: default_tick_rate_ms(),
            animation: AnimationConfig::default(),
            dial: DialConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
