//! Timeline data model.
//!
//! Periods and their events are immutable once loaded. A [`Timeline`] always
//! holds at least one period.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::warn;

/// Heading used when the data does not provide one.
pub const DEFAULT_TITLE: &str = "Historical Dates";

/// A single dated event inside a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub year: i32,
    pub text: String,
}

impl Event {
    pub fn new(year: i32, text: impl Into<String>) -> Self {
        Self {
            year,
            text: text.into(),
        }
    }
}

/// A named range of years with its events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First year of the range.
    pub from: i32,
    /// Last year of the range.
    pub to: i32,
    pub title: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Period {
    pub fn new(from: i32, to: i32, title: impl Into<String>) -> Self {
        Self {
            from,
            to,
            title: title.into(),
            events: Vec::new(),
        }
    }

    /// Add an event (builder style).
    #[must_use]
    pub fn event(mut self, year: i32, text: impl Into<String>) -> Self {
        self.events.push(Event::new(year, text));
        self
    }
}

/// On-disk shapes accepted for a periods file.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimelineFile {
    Periods(Vec<Period>),
    Document {
        #[serde(default)]
        title: Option<String>,
        periods: Vec<Period>,
    },
}

#[derive(Serialize)]
struct TimelineDocument<'a> {
    title: &'a str,
    periods: &'a [Period],
}

/// Ordered, non-empty sequence of periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    title: String,
    periods: Vec<Period>,
}

impl Timeline {
    /// Build a timeline from periods in display order.
    pub fn new(periods: Vec<Period>) -> Result<Self, TimelineError> {
        if periods.is_empty() {
            return Err(TimelineError::Empty);
        }

        for (index, period) in periods.iter().enumerate() {
            if period.from > period.to {
                warn!(
                    index,
                    from = period.from,
                    to = period.to,
                    "period ends before it starts"
                );
            }
        }

        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            periods,
        })
    }

    /// Build from data known to be non-empty.
    pub(crate) fn from_static(title: &str, periods: Vec<Period>) -> Self {
        debug_assert!(!periods.is_empty());
        Self {
            title: title.to_string(),
            periods,
        }
    }

    /// Replace the heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Parse a timeline from JSON.
    ///
    /// Accepts either a bare array of periods or an object with `periods`
    /// and an optional `title`.
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        let file: TimelineFile = serde_json::from_str(json).map_err(TimelineError::Parse)?;
        match file {
            TimelineFile::Periods(periods) => Self::new(periods),
            TimelineFile::Document { title, periods } => {
                let timeline = Self::new(periods)?;
                Ok(match title {
                    Some(title) => timeline.with_title(title),
                    None => timeline,
                })
            }
        }
    }

    /// Load a timeline from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TimelineError> {
        let content = std::fs::read_to_string(path).map_err(TimelineError::Io)?;
        Self::from_json(&content)
    }

    /// Serialize to the object form accepted by [`Timeline::from_json`].
    pub fn to_json_pretty(&self) -> Result<String, TimelineError> {
        let document = TimelineDocument {
            title: &self.title,
            periods: &self.periods,
        };
        serde_json::to_string_pretty(&document).map_err(TimelineError::Serialize)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods (never zero).
    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.periods.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Period at `index`, clamped into range.
    pub fn period(&self, index: usize) -> &Period {
        let last = self.periods.len() - 1;
        &self.periods[index.min(last)]
    }

    /// Total number of events across all periods.
    pub fn event_count(&self) -> usize {
        self.periods.iter().map(|p| p.events.len()).sum()
    }
}

/// Errors that can occur when loading a timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// The data contains no periods.
    #[error("timeline has no periods")]
    Empty,

    /// I/O error reading the periods file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing periods JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing periods to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
