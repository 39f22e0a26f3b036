// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the duct path counting algorithm.
//!
//! Counts the simple paths through a rectangular grid of rooms that start at
//! a designated start room, end at a designated end room, visit every owned
//! room exactly once, and move only between edge-adjacent rooms. Rooms we do
//! not own are excluded and never entered. This is Hamiltonian path counting
//! on a grid graph with holes, made tractable by connectivity pruning.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Immutable grid data
//!
//! Computed once from the input and never modified during search:
//! - [`Grid`] - dimensions, start/end rooms, the non-excluded room budget
//! - [`CellClass`] - each room's topological class (interior, edge, corner,
//!   excluded), which fixes its neighbor set via a static direction table
//!
//! ## Tier 2: Mutable search state
//!
//! Owned exclusively by the running search and restored on backtrack:
//! - [`PathState`] - the path stack, the visited mask, and the count of
//!   rooms still to cover
//! - [`Statistics`] - counters for solutions and per-predicate prunes
//!
//! # Search Algorithm
//!
//! [`Search`] explores the grid depth first. Before branching from a newly
//! entered room it runs the pruning predicates in [`pruning`]:
//!
//! 1. **Previous-neighbor sweep** - leaving a room must not have created a
//!    dead end among that room's other neighbors
//! 2. **End reachability** - the end room must keep at least one open side
//!    while more than one room remains
//! 3. **Edge splitting** - walking onto a boundary edge from off the edge
//!    must not cut the unvisited area in two (only checked when the start
//!    room lies on the boundary)
//!
//! Branches that survive pruning recurse over the class-appropriate
//! neighbor directions; a branch contributes one solution when exactly the
//! end room remains and the next step reaches it. Backtracking is the call
//! stack itself: every push is undone by the matching pop when the frame
//! returns.

pub mod geometry;
pub mod parse;
pub mod pruning;
pub mod render;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use geometry::{CellClass, Direction, Grid};
pub use parse::{parse_grid, ParseGridError};
pub use search::{count_paths, Search, SearchOutcome};
pub use state::{Counter, PathState, Statistics};
