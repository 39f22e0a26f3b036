// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning predicates.
//!
//! Four pure reads of the grid and the path state, run before a partial
//! path is allowed to branch further:
//!
//! - [`previous_neighbors_open`] - the previous-neighbor dead-end sweep
//! - [`no_dead_end`] - the single-room check the sweep is built from
//! - [`end_reachable`] - the end room must keep an open side
//! - [`edge_not_split`] - boundary moves must not cut the area in two
//!
//! All of them are necessary-but-not-sufficient heuristics: they cut some
//! but not all doomed branches, and they never cut a branch with a valid
//! completion. The trigger conditions are load-bearing - do not strengthen
//! or weaken them without re-verifying counts against the pruning-free
//! oracle the test suite runs on small grids.

pub mod dead_end;
pub mod edge_split;
pub mod end_cell;

pub use dead_end::{no_dead_end, previous_neighbors_open};
pub use edge_split::edge_not_split;
pub use end_cell::end_reachable;
