// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-reachability check.
//!
//! The end room is never pushed onto the path; it must stay reachable until
//! the final step. While two or more rooms remain to cover, losing the last
//! open side of the end room turns it into an unreachable island and the
//! branch can be cut immediately.

use crate::geometry::Grid;
use crate::state::PathState;

/// True unless every neighbor of the end room is already visited while the
/// path still has at least two rooms to go.
///
/// With fewer than two rooms remaining the check passes unconditionally:
/// the only room left to cover is the end room itself, and its neighbor
/// count no longer matters.
pub fn end_reachable(grid: &Grid, state: &PathState) -> bool {
    if state.remaining() < 2 {
        return true;
    }
    let end = grid.end();
    grid.class(end)
        .directions()
        .iter()
        .any(|&direction| !state.is_visited(grid.step(end, direction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_grid;

    #[test]
    fn test_enclosed_end_room_fails() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        // End room 8 (bottom-right) has neighbors 5 and 7.
        state.push(5);
        state.push(7);
        assert!(state.remaining() >= 2);
        assert!(!end_reachable(&grid, &state));
    }

    #[test]
    fn test_one_open_side_suffices() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(5);
        assert!(end_reachable(&grid, &state));
    }

    #[test]
    fn test_exempt_on_final_step() {
        let grid = parse_grid("2 2  2 0  0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(0);
        state.push(1);
        state.push(2);
        // Both neighbors of the end room are visited, but only the end
        // room remains, so the check no longer applies.
        assert_eq!(state.remaining(), 1);
        assert!(end_reachable(&grid, &state));
    }
}
