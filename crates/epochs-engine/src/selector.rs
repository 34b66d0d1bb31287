//! Active period selection.
//!
//! The selector is the single writer of the active index. Every mutation is
//! clamped into `0..len`; nothing wraps and nothing is rejected.

use std::num::NonZeroUsize;

/// Step direction for [`PeriodSelector::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous period (`-1`).
    Backward,
    /// Next period (`+1`).
    Forward,
}

impl Direction {
    /// Signed step applied to the index.
    pub fn step(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// An index mutation that actually moved the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

/// Holds the active period index for a timeline of fixed length.
#[derive(Debug, Clone)]
pub struct PeriodSelector {
    index: usize,
    len: NonZeroUsize,
}

impl PeriodSelector {
    /// Create a selector positioned on the first period.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Whether a previous period exists.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Whether a next period exists.
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.len.get()
    }

    /// Move one period in `direction`. No-op at the boundaries.
    pub fn advance(&mut self, direction: Direction) -> Option<IndexChange> {
        let target = i64::try_from(self.index).unwrap_or(i64::MAX) + direction.step();
        self.jump_to(target)
    }

    /// Select the period at `index`, clamped into range.
    pub fn jump_to(&mut self, index: i64) -> Option<IndexChange> {
        let clamped = self.clamp(index);
        if clamped == self.index {
            return None;
        }

        let change = IndexChange {
            previous: self.index,
            current: clamped,
        };
        self.index = clamped;
        Some(change)
    }

    fn clamp(&self, index: i64) -> usize {
        let last = self.len.get() - 1;
        if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(last, |i| i.min(last))
        }
    }
}
