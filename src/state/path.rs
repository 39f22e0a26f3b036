// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The partial path: stack, visited mask, and remaining-room counter.
//!
//! One `PathState` exists per search and is mutated in place: a push on
//! entry to a branch, the matching pop when the branch returns. The visited
//! mask doubles as the exclusion test - excluded rooms are marked visited
//! at construction and stay that way, so neighbor scans in the pruning
//! predicates never need a separate ownership check.

use crate::geometry::Grid;

/// Mutable search state for one in-progress path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    /// True iff the room is excluded or currently on the path.
    visited: Vec<bool>,
    /// Visited rooms in travel order; the last entry is the tip.
    path: Vec<usize>,
    /// Non-excluded rooms not yet on the path.
    remaining: usize,
}

impl PathState {
    /// Fresh state for `grid`: empty path, mask pre-set for excluded rooms.
    ///
    /// The path vector is reserved up front; nothing allocates inside the
    /// search recursion.
    pub fn new(grid: &Grid) -> Self {
        let visited = (0..grid.area()).map(|cell| grid.is_excluded(cell)).collect();
        Self {
            visited,
            path: Vec::with_capacity(grid.cell_budget()),
            remaining: grid.cell_budget(),
        }
    }

    /// Append `cell` to the path and mark it visited.
    ///
    /// Returns false without any effect when the room is already visited
    /// (or excluded); callers must not assume progress without checking.
    pub fn push(&mut self, cell: usize) -> bool {
        if self.visited[cell] {
            return false;
        }
        self.visited[cell] = true;
        self.path.push(cell);
        self.remaining -= 1;
        true
    }

    /// Remove and return the tip, clearing its visited bit.
    ///
    /// Returns `None` on an empty path. Excluded rooms are never pushed,
    /// so popping never clears an exclusion bit.
    pub fn pop(&mut self) -> Option<usize> {
        let cell = self.path.pop()?;
        debug_assert!(self.visited[cell]);
        self.visited[cell] = false;
        self.remaining += 1;
        Some(cell)
    }

    /// The most recently visited room.
    pub fn tip(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// The room visited just before the tip, if the path has two rooms.
    pub fn previous(&self) -> Option<usize> {
        self.path.len().checked_sub(2).map(|i| self.path[i])
    }

    /// True iff the room is excluded or on the path.
    pub fn is_visited(&self, cell: usize) -> bool {
        self.visited[cell]
    }

    /// Non-excluded rooms not yet covered by the path.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The path so far, start first.
    pub fn cells(&self) -> &[usize] {
        &self.path
    }
}
