// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: immutable grid geometry.
//!
//! Everything in this module is computed once when the grid is parsed and
//! is read-only during search: room classes, the static per-class neighbor
//! tables, and the [`Grid`] itself.

pub mod cell;
pub mod grid;

pub use cell::{CellClass, Direction};
pub use grid::Grid;

pub(crate) use cell::classify;
