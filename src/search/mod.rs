// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The recursive search engine.
//!
//! [`Search`] owns the path state for one exhaustive count. The engine is
//! plain depth-first recursion: `expand` prunes the current partial path
//! and branches over the tip's class-appropriate directions, `try_step`
//! screens a candidate room, pushes it, recurses, and pops it again. The
//! call stack is the backtracking mechanism - every frame that pushes pops
//! exactly once before returning.
//!
//! Solutions are recognized one step early: when exactly one room remains
//! uncovered and the candidate is the end room, the branch contributes a
//! solution without pushing. The end room is therefore never on the path.
//!
//! Termination is well-founded: the remaining-room count strictly
//! decreases on every push and the branching factor is at most four.

use crate::geometry::Grid;
use crate::pruning;
use crate::state::{Counter, PathState, Statistics};

/// The result of an exhaustive search: the count plus its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of paths covering every owned room, start to end.
    pub solutions: u64,
    /// Event counters collected along the way.
    pub statistics: Statistics,
}

/// One exhaustive path count over a borrowed grid.
pub struct Search<'g> {
    grid: &'g Grid,
    state: PathState,
    statistics: Statistics,
}

impl<'g> Search<'g> {
    /// Set up a search with the start room already on the path.
    pub fn new(grid: &'g Grid) -> Self {
        let mut state = PathState::new(grid);
        let pushed = state.push(grid.start());
        debug_assert!(pushed, "the start room is validated as non-excluded");
        Self {
            grid,
            state,
            statistics: Statistics::new(),
        }
    }

    /// Run the search to exhaustion.
    ///
    /// Consumes the search; the outcome carries the solution count and the
    /// statistics. The count is a pure function of the grid - branch order
    /// affects only the traces, never the sum.
    pub fn run(mut self) -> SearchOutcome {
        let solutions = self.expand();
        SearchOutcome {
            solutions,
            statistics: self.statistics,
        }
    }

    /// Prune at the current tip, then branch over its neighbors.
    fn expand(&mut self) -> u64 {
        self.statistics.increment(Counter::NodesExpanded);

        if !pruning::previous_neighbors_open(self.grid, &self.state) {
            self.statistics.increment(Counter::DeadEndPrunes);
            return 0;
        }
        if !pruning::end_reachable(self.grid, &self.state) {
            self.statistics.increment(Counter::EndBlockedPrunes);
            return 0;
        }

        let tip = self.state.tip().expect("expand requires a seeded path");
        let class = self.grid.class(tip);

        // Corners and interior rooms bypass the edge-splitting check.
        if class.is_edge() && !pruning::edge_not_split(self.grid, &self.state) {
            self.statistics.increment(Counter::EdgeSplitPrunes);
            return 0;
        }

        let mut found = 0;
        for &direction in class.directions() {
            found += self.try_step(self.grid.step(tip, direction));
        }
        found
    }

    /// Screen a candidate room, then recurse through it.
    fn try_step(&mut self, cell: usize) -> u64 {
        let remaining = self.state.remaining();
        if self.state.is_visited(cell) || (remaining >= 2 && cell == self.grid.end()) {
            // Visited, excluded, or the end room while rooms remain
            // uncovered: nothing down this branch.
            return 0;
        }
        if remaining == 1 && cell == self.grid.end() {
            self.statistics.increment(Counter::Solutions);
            return 1;
        }

        self.state.push(cell);
        let found = self.expand();
        self.state.pop();
        found
    }
}

/// Count the complete paths from start to end over `grid`.
///
/// # Example
///
/// ```
/// use duct_search::{count_paths, parse_grid};
///
/// let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
/// assert_eq!(count_paths(&grid), 2);
/// ```
pub fn count_paths(grid: &Grid) -> u64 {
    Search::new(grid).run().solutions
}
