// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The immutable grid: dimensions, per-room classes, start and end rooms.
//!
//! A `Grid` is built once by [`crate::parse`] from validated input and is
//! read-only for the lifetime of every search that borrows it.

use crate::geometry::{CellClass, Direction};

/// An immutable rectangular grid of classified rooms.
///
/// Rooms are addressed by row-major index: `index = y * width + x`.
/// Invariants, established at parse time:
/// - `width >= 2` and `height >= 2`
/// - exactly one start room and one end room, both non-excluded
/// - excluded rooms have class [`CellClass::Excluded`] regardless of their
///   position on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    classes: Vec<CellClass>,
    start: usize,
    end: usize,
    start_on_boundary: bool,
    cell_budget: usize,
}

impl Grid {
    /// Assemble a grid from already-validated parts.
    ///
    /// The boundary flag and the room budget are derived here so they can
    /// never drift from the class vector.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        classes: Vec<CellClass>,
        start: usize,
        end: usize,
    ) -> Self {
        debug_assert_eq!(classes.len(), width * height);
        let cell_budget = classes
            .iter()
            .filter(|&&class| class != CellClass::Excluded)
            .count();
        let start_on_boundary = classes[start].is_boundary();
        Self {
            width,
            height,
            classes,
            start,
            end,
            start_on_boundary,
            cell_budget,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of rooms, excluded ones included.
    pub fn area(&self) -> usize {
        self.classes.len()
    }

    /// Number of non-excluded rooms, i.e. the length of a complete path.
    pub fn cell_budget(&self) -> usize {
        self.cell_budget
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// True when the start room sits on an edge or corner of the board.
    /// Gates the edge-splitting check.
    pub fn start_on_boundary(&self) -> bool {
        self.start_on_boundary
    }

    /// The topological class of the given room.
    pub fn class(&self, cell: usize) -> CellClass {
        self.classes[cell]
    }

    pub fn is_excluded(&self, cell: usize) -> bool {
        self.classes[cell] == CellClass::Excluded
    }

    /// Row-major index of the room at `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// The neighbor of `cell` in the given direction.
    ///
    /// Callers must only step in directions listed by the cell's class
    /// table; those are guaranteed to stay on the board.
    pub fn step(&self, cell: usize, direction: Direction) -> usize {
        match direction {
            Direction::Up => cell - self.width,
            Direction::Down => cell + self.width,
            Direction::Left => cell - 1,
            Direction::Right => cell + 1,
        }
    }
}
