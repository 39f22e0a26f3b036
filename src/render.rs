// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of boards and paths.
//!
//! The search core only counts; these helpers exist for the binary and for
//! debugging. A rendered path shows, on every room after the first, the
//! arrow of the move that entered it:
//!
//! ```text
//! * v .
//! > v .
//! . > >
//! ```

use crate::geometry::Grid;
use std::fmt::Write;

const EXCLUDED: char = '#';
const FREE: char = '.';
const START: char = 'S';
const END: char = 'E';
const PATH_START: char = '*';

/// Render the parsed board: `S`/`E` for start and end, `#` for excluded
/// rooms, `.` for the rest.
pub fn layout(grid: &Grid) -> String {
    glyph_rows(grid, |cell| {
        if cell == grid.start() {
            START
        } else if cell == grid.end() {
            END
        } else if grid.is_excluded(cell) {
            EXCLUDED
        } else {
            FREE
        }
    })
}

/// Render a path, given in travel order, over the board.
///
/// The first room is marked `*`; every later room carries the arrow of the
/// step that entered it. Rooms not on the path render as in [`layout`]'s
/// background (`#` or `.`).
pub fn path(grid: &Grid, cells: &[usize]) -> String {
    let mut glyphs = vec![None; grid.area()];
    for (position, &cell) in cells.iter().enumerate() {
        let glyph = if position == 0 {
            PATH_START
        } else {
            step_glyph(cells[position - 1], cell, grid.width())
        };
        glyphs[cell] = Some(glyph);
    }
    glyph_rows(grid, |cell| {
        glyphs[cell].unwrap_or(if grid.is_excluded(cell) { EXCLUDED } else { FREE })
    })
}

/// The arrow for a single step between edge-adjacent rooms.
fn step_glyph(from: usize, to: usize, width: usize) -> char {
    if to == from + 1 {
        '>'
    } else if from == to + 1 {
        '<'
    } else if to == from + width {
        'v'
    } else if from == to + width {
        '^'
    } else {
        debug_assert!(false, "path rooms {from} and {to} are not adjacent");
        '?'
    }
}

fn glyph_rows(grid: &Grid, glyph: impl Fn(usize) -> char) -> String {
    let mut out = String::with_capacity(grid.area() * 2 + grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let _ = write!(out, "{} ", glyph(grid.index(x, y)));
        }
        out.push('\n');
    }
    out
}
