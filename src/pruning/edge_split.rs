// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boundary edge-splitting check.
//!
//! Only meaningful when the start room lies on the grid boundary. Consider
//! arriving at a top-edge room from below, with both edge rooms flanking
//! the tip still unvisited:
//!
//! ```text
//! ? . x . ?   <- x marks the tip, . an unvisited edge room.
//! ? ? p ? ?   <- p marks the previous room.
//! ```
//!
//! Relative to a boundary-anchored start, the move cuts the unvisited area
//! into two regions that can no longer reach each other, so no completion
//! exists. The check only fires when the boundary is entered from off the
//! boundary line: arriving from a room of the same edge class is walking
//! along the edge, which splits nothing.

use crate::geometry::Grid;
use crate::state::PathState;

/// True unless the last move split the boundary.
///
/// Trivially valid when the start room is not on the boundary, when the
/// path has fewer than two rooms, or when the tip is not one of the four
/// edge classes (corners and interior rooms bypass the check).
pub fn edge_not_split(grid: &Grid, state: &PathState) -> bool {
    if !grid.start_on_boundary() {
        return true;
    }
    let (Some(tip), Some(previous)) = (state.tip(), state.previous()) else {
        return true;
    };
    let class = grid.class(tip);
    let Some(flanking) = class.flanking() else {
        return true;
    };
    grid.class(previous) == class
        || flanking
            .iter()
            .any(|&direction| state.is_visited(grid.step(tip, direction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_grid;

    fn grid_5x4_boundary_start() -> Grid {
        parse_grid("5 4  2 0 0 0 0  0 0 0 0 0  0 0 0 0 0  0 0 0 0 3").unwrap()
    }

    #[test]
    fn test_arrival_from_interior_with_open_flanks_splits() {
        let grid = grid_5x4_boundary_start();
        let mut state = PathState::new(&grid);
        // Step from the interior room (2,1) up onto the top edge at (2,0).
        state.push(grid.index(2, 1));
        state.push(grid.index(2, 0));
        assert!(!edge_not_split(&grid, &state));
    }

    #[test]
    fn test_walking_along_the_edge_is_fine() {
        let grid = grid_5x4_boundary_start();
        let mut state = PathState::new(&grid);
        state.push(grid.index(1, 0));
        state.push(grid.index(2, 0));
        assert!(edge_not_split(&grid, &state));
    }

    #[test]
    fn test_visited_flank_keeps_the_regions_joined() {
        let grid = grid_5x4_boundary_start();
        let mut state = PathState::new(&grid);
        state.push(grid.index(3, 0));
        state.push(grid.index(2, 1));
        state.push(grid.index(2, 0));
        assert!(edge_not_split(&grid, &state));
    }

    #[test]
    fn test_interior_start_disables_the_check() {
        let grid =
            parse_grid("5 4  0 0 0 0 0  0 2 0 0 0  0 0 0 0 0  0 0 0 0 3").unwrap();
        let mut state = PathState::new(&grid);
        state.push(grid.index(2, 1));
        state.push(grid.index(2, 0));
        assert!(edge_not_split(&grid, &state));
    }

    #[test]
    fn test_side_edges_check_vertical_flanks() {
        let grid = grid_5x4_boundary_start();
        let mut state = PathState::new(&grid);
        // Step from the interior room (1,2) left onto the left edge (0,2).
        state.push(grid.index(1, 2));
        state.push(grid.index(0, 2));
        assert!(!edge_not_split(&grid, &state));
    }
}
