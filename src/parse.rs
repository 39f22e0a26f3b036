// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid construction from the textual input format.
//!
//! The input is a whitespace-separated stream of integers: width, height
//! (both at least 2), then exactly `width * height` room flags in row-major
//! order. Flags: `0` = owned room, `1` = excluded room, `2` = start room,
//! `3` = end room. Exactly one start and one end must appear.
//!
//! All validation happens here, before any search state exists; the search
//! core only ever sees a well-formed [`Grid`].

use crate::geometry::{classify, CellClass, Grid};
use std::str::FromStr;
use thiserror::Error;

/// Errors reported while reading a grid description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// Width or height token absent.
    #[error("missing {0}")]
    MissingDimension(&'static str),

    /// A token that should have been a non-negative integer.
    #[error("invalid token {0:?}, expected a non-negative integer")]
    InvalidToken(String),

    /// A width or height of 0 or 1 leaves no room for a path.
    #[error("the grid is too small: {width}x{height} (both sides must be at least 2)")]
    Degenerate { width: usize, height: usize },

    /// Fewer or more room flags than `width * height`.
    #[error("expected {expected} room flags, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    /// A room flag outside `0..=3`.
    #[error("unrecognized room flag {flag} at room {index}")]
    InvalidCellFlag { index: usize, flag: u64 },

    /// More than one room flagged `2`.
    #[error("the start room has already been designated (rooms {first} and {second})")]
    DuplicateStart { first: usize, second: usize },

    /// More than one room flagged `3`.
    #[error("the end room has already been designated (rooms {first} and {second})")]
    DuplicateEnd { first: usize, second: usize },

    /// No room flagged `2`.
    #[error("no start room was designated")]
    MissingStart,

    /// No room flagged `3`.
    #[error("no end room was designated")]
    MissingEnd,
}

/// Parse a grid description.
///
/// # Example
///
/// ```
/// use duct_search::parse_grid;
///
/// // 3x3 board, start top-left, end bottom-right, one excluded room.
/// let grid = parse_grid("3 3  2 0 0  0 1 0  0 0 3").unwrap();
/// assert_eq!(grid.cell_budget(), 8);
/// ```
pub fn parse_grid(input: &str) -> Result<Grid, ParseGridError> {
    let mut tokens = input.split_whitespace();

    let width = dimension(tokens.next(), "width")?;
    let height = dimension(tokens.next(), "height")?;
    if width < 2 || height < 2 {
        return Err(ParseGridError::Degenerate { width, height });
    }

    let area = width * height;
    let mut classes = Vec::with_capacity(area);
    let mut start = None;
    let mut end = None;

    for index in 0..area {
        let token = tokens
            .next()
            .ok_or(ParseGridError::WrongCellCount {
                expected: area,
                found: index,
            })?;
        let flag: u64 = token
            .parse()
            .map_err(|_| ParseGridError::InvalidToken(token.to_string()))?;

        let (x, y) = (index % width, index / width);
        match flag {
            1 => {
                classes.push(CellClass::Excluded);
                continue;
            }
            0 => {}
            2 => match start {
                None => start = Some(index),
                Some(first) => {
                    return Err(ParseGridError::DuplicateStart {
                        first,
                        second: index,
                    })
                }
            },
            3 => match end {
                None => end = Some(index),
                Some(first) => {
                    return Err(ParseGridError::DuplicateEnd {
                        first,
                        second: index,
                    })
                }
            },
            _ => return Err(ParseGridError::InvalidCellFlag { index, flag }),
        }
        classes.push(classify(x, y, width, height));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(ParseGridError::WrongCellCount {
            expected: area,
            found: area + trailing,
        });
    }

    let start = start.ok_or(ParseGridError::MissingStart)?;
    let end = end.ok_or(ParseGridError::MissingEnd)?;
    Ok(Grid::from_parts(width, height, classes, start, end))
}

fn dimension(token: Option<&str>, name: &'static str) -> Result<usize, ParseGridError> {
    let token = token.ok_or(ParseGridError::MissingDimension(name))?;
    token
        .parse()
        .map_err(|_| ParseGridError::InvalidToken(token.to_string()))
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}
