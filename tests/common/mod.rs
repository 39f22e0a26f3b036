// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared test helpers: an ASCII sketch grid builder and a pruning-free
//! brute-force oracle to pin the engine's counts against.

#![allow(dead_code)]

use duct_search::{parse_grid, Grid};

/// Build a grid from an ASCII sketch.
///
/// One line per row: `.` owned room, `#` excluded room, `S` start, `E`
/// end. Leading/trailing whitespace per line is ignored so sketches can be
/// indented in the test source.
pub fn grid(sketch: &str) -> Grid {
    let rows: Vec<&str> = sketch
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!rows.is_empty(), "empty sketch");
    let width = rows[0].len();
    let height = rows.len();

    let mut text = format!("{width} {height}");
    for row in &rows {
        assert_eq!(row.len(), width, "ragged sketch row {row:?}");
        for ch in row.chars() {
            let flag = match ch {
                '.' => '0',
                '#' => '1',
                'S' => '2',
                'E' => '3',
                _ => panic!("unexpected sketch character {ch:?}"),
            };
            text.push(' ');
            text.push(flag);
        }
    }
    parse_grid(&text).expect("sketch must describe a valid grid")
}

/// Count complete paths by exhaustive search with no pruning at all.
///
/// Neighbors come from raw bounds arithmetic rather than the class tables,
/// so this is an independent check of the whole engine, not just of the
/// pruning predicates.
pub fn brute_force_count(grid: &Grid) -> u64 {
    let mut visited: Vec<bool> = (0..grid.area()).map(|cell| grid.is_excluded(cell)).collect();
    visited[grid.start()] = true;
    dfs(grid, &mut visited, grid.start(), grid.cell_budget() - 1)
}

fn dfs(grid: &Grid, visited: &mut [bool], cell: usize, remaining: usize) -> u64 {
    if remaining == 0 {
        return u64::from(cell == grid.end());
    }
    let width = grid.width();
    let (x, y) = (cell % width, cell / width);

    let mut neighbors = [None; 4];
    if x > 0 {
        neighbors[0] = Some(cell - 1);
    }
    if x + 1 < width {
        neighbors[1] = Some(cell + 1);
    }
    if y > 0 {
        neighbors[2] = Some(cell - width);
    }
    if y + 1 < grid.height() {
        neighbors[3] = Some(cell + width);
    }

    let mut total = 0;
    for next in neighbors.into_iter().flatten() {
        if visited[next] {
            continue;
        }
        // The end room may only be entered as the very last step.
        if next == grid.end() && remaining > 1 {
            continue;
        }
        visited[next] = true;
        total += dfs(grid, visited, next, remaining - 1);
        visited[next] = false;
    }
    total
}
