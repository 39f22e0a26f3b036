// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Room classes and movement directions.
//!
//! Every room is assigned one of ten topological classes when the grid is
//! built: interior, one of four edge classes, one of four corner classes,
//! or excluded. The class fixes which neighbors a room has, so all neighbor
//! enumeration in the crate goes through a single static direction table
//! per class instead of per-call bounds arithmetic.

/// A movement direction between edge-adjacent rooms.
///
/// In row-major indexing, `Up`/`Down` step by the grid width and
/// `Left`/`Right` step by one within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The glyph used when rendering a step in this direction.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

/// The topological class of a room, derived once from its coordinates and
/// the excluded set.
///
/// Width and height are both at least 2, so the nine geometric classes are
/// mutually exclusive. Excluded rooms carry no neighbors at all: they are
/// never entered and never branched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Interior,
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Excluded,
}

use Direction::{Down, Left, Right, Up};

impl CellClass {
    /// The neighbors of a room of this class, as directions.
    ///
    /// The order is fixed and is the branch order of the search, so traces
    /// are deterministic. Every listed direction stays on the board for a
    /// room of the given class.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            CellClass::Interior => &[Left, Right, Up, Down],
            CellClass::TopEdge => &[Left, Right, Down],
            CellClass::BottomEdge => &[Left, Right, Up],
            CellClass::LeftEdge => &[Right, Up, Down],
            CellClass::RightEdge => &[Left, Up, Down],
            CellClass::TopLeft => &[Right, Down],
            CellClass::TopRight => &[Left, Down],
            CellClass::BottomLeft => &[Right, Up],
            CellClass::BottomRight => &[Left, Up],
            CellClass::Excluded => &[],
        }
    }

    /// The two neighbors that flank a room along its own boundary line.
    ///
    /// `None` for interior, corner and excluded rooms; the edge-splitting
    /// check only applies to the four edge classes.
    pub fn flanking(self) -> Option<[Direction; 2]> {
        match self {
            CellClass::TopEdge | CellClass::BottomEdge => Some([Left, Right]),
            CellClass::LeftEdge | CellClass::RightEdge => Some([Up, Down]),
            _ => None,
        }
    }

    /// True for the four edge classes (not corners, not interior).
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            CellClass::TopEdge | CellClass::BottomEdge | CellClass::LeftEdge | CellClass::RightEdge
        )
    }

    /// True for any class on the grid boundary: edges and corners.
    pub fn is_boundary(self) -> bool {
        !matches!(self, CellClass::Interior | CellClass::Excluded)
    }
}

/// Classify a room by its coordinates alone (exclusion is handled by the
/// grid builder, which overrides the class of excluded rooms).
///
/// Requires `width >= 2` and `height >= 2`; with degenerate grids rejected
/// at parse time, a room cannot be on two opposite boundaries at once.
pub(crate) fn classify(x: usize, y: usize, width: usize, height: usize) -> CellClass {
    let left = x == 0;
    let right = x == width - 1;
    match (y == 0, y == height - 1) {
        (true, _) if left => CellClass::TopLeft,
        (true, _) if right => CellClass::TopRight,
        (_, true) if left => CellClass::BottomLeft,
        (_, true) if right => CellClass::BottomRight,
        (true, false) => CellClass::TopEdge,
        (false, true) => CellClass::BottomEdge,
        (false, false) if left => CellClass::LeftEdge,
        (false, false) if right => CellClass::RightEdge,
        (false, false) => CellClass::Interior,
        // Unreachable: width >= 2 and height >= 2 are enforced at parse
        // time, so a room cannot sit on two opposite boundaries.
        (true, true) => unreachable!(),
    }
}
