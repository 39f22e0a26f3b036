// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Load-time validation: every malformed input is rejected before any
//! search state exists.

use duct_search::{Grid, ParseGridError};

#[test]
fn test_from_str_round_trip() {
    let grid: Grid = "3 2  2 0 0  0 0 3".parse().unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 2));
    assert_eq!((grid.start(), grid.end()), (0, 5));
}

#[test]
fn test_degenerate_dimensions_are_fatal() {
    for input in ["1 2  2 3", "2 1  2 3", "0 0", "5 1  2 0 0 0 3"] {
        let result: Result<Grid, _> = input.parse();
        assert!(
            matches!(result, Err(ParseGridError::Degenerate { .. })),
            "accepted degenerate input {input:?}"
        );
    }
}

#[test]
fn test_error_messages_name_the_rooms() {
    let err = "2 2  2 0 2 3".parse::<Grid>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "the start room has already been designated (rooms 0 and 2)"
    );

    let err = "2 2  2 9 0 3".parse::<Grid>().unwrap_err();
    assert_eq!(err.to_string(), "unrecognized room flag 9 at room 1");
}

#[test]
fn test_missing_designations_are_fatal() {
    assert_eq!(
        "2 2  0 0 0 3".parse::<Grid>().unwrap_err(),
        ParseGridError::MissingStart
    );
    assert_eq!(
        "2 2  2 0 0 0".parse::<Grid>().unwrap_err(),
        ParseGridError::MissingEnd
    );
    assert_eq!(
        "2 2".parse::<Grid>().unwrap_err(),
        ParseGridError::WrongCellCount {
            expected: 4,
            found: 0
        }
    );
}
