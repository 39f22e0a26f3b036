// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters incremented by the search as it expands nodes, prunes branches
//! and completes solutions. Cheap enough to keep enabled unconditionally;
//! the binary reports them at debug log level.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The events counted during a search.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counter {
    /// Completed solutions (the end room reached with nothing left over).
    Solutions,
    /// Calls into the branch expansion step.
    NodesExpanded,
    /// Branches cut by the previous-neighbor dead-end sweep.
    DeadEndPrunes,
    /// Branches cut because the end room lost its last open side.
    EndBlockedPrunes,
    /// Branches cut by the boundary edge-splitting check.
    EdgeSplitPrunes,
}

/// Event counters for one search run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    counts: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counter) {
        self.counts[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter as usize]
    }
}
