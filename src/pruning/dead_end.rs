// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dead-end detection.
//!
//! A non-end room reduced to fewer than two open sides can be entered but
//! never left (or never entered at all), so the partial path can no longer
//! be completed. The single-room check is applied to every neighbor of the
//! room the path just left, which catches dead ends created as a side
//! effect of leaving it:
//!
//! ```text
//! * * * ? ?
//! * . * x ?   <- x marks the tip, . an unvisited room,
//! * . * ? ?      * visited rooms.
//! * * * ? ?
//! ```
//!
//! Stepping onto `x` left the column of `.` rooms with a single open side
//! each; no completion can cover them.

use crate::geometry::Grid;
use crate::state::PathState;

/// True unless `position` has become a dead end.
///
/// Rooms already visited (including excluded rooms, whose mask bit is
/// permanently set) pass trivially, as does the end room: it is allowed to
/// be entered last through a single open side.
pub fn no_dead_end(grid: &Grid, state: &PathState, position: usize) -> bool {
    if state.is_visited(position) || position == grid.end() {
        return true;
    }
    let open = grid
        .class(position)
        .directions()
        .iter()
        .filter(|&&direction| !state.is_visited(grid.step(position, direction)))
        .count();
    open >= 2
}

/// Sweep every neighbor of the second-to-last path room with
/// [`no_dead_end`]. Trivially valid while the path has fewer than two
/// rooms.
pub fn previous_neighbors_open(grid: &Grid, state: &PathState) -> bool {
    let Some(previous) = state.previous() else {
        return true;
    };
    grid.class(previous)
        .directions()
        .iter()
        .all(|&direction| no_dead_end(grid, state, grid.step(previous, direction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_grid;

    #[test]
    fn test_open_corner_is_not_a_dead_end() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let state = PathState::new(&grid);
        // Untouched board: every room keeps at least two open sides.
        for cell in 0..grid.area() {
            assert!(no_dead_end(&grid, &state, cell));
        }
    }

    #[test]
    fn test_isolated_corner_is_a_dead_end() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(1);
        state.push(3);
        // Room 0 now has both neighbors on the path.
        assert!(!no_dead_end(&grid, &state, 0));
    }

    #[test]
    fn test_end_room_is_exempt() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(5);
        state.push(7);
        // The end room (8) is fully enclosed but still passes.
        assert!(no_dead_end(&grid, &state, 8));
    }

    #[test]
    fn test_sweep_catches_corner_cut_off_by_last_move() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        // Path 3 -> 4: leaving 3 reduces the corner at 0 to a single open
        // side (neighbor 1), so the sweep over 3's neighbors must fail.
        state.push(3);
        state.push(4);
        assert!(!previous_neighbors_open(&grid, &state));
    }

    #[test]
    fn test_sweep_trivial_for_singleton_path() {
        let grid = parse_grid("3 3  2 0 0  0 0 0  0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(4);
        assert!(previous_neighbors_open(&grid, &state));
    }
}
