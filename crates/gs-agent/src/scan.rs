//! The forward-cone sensor model.
//!
//! The scanner observes a fixed 2×3 rectangle immediately ahead of the
//! agent, two cells deep and three cells wide:
//!
//! ```text
//!          . . .        facing north: rows −2..−1, cols −1..+1
//!          . . .
//!            A
//! ```
//!
//! The cone never includes the agent's own cell.  Cells outside the grid are
//! skipped; cells already scanned are not re-counted; traversability is NOT
//! consulted — a marked blocked cell reads as observed blocked space.

use std::ops::RangeInclusive;

use gs_core::{Heading, Pos, Pose};
use gs_grid::Grid;

/// The `(Δrow, Δcol)` ranges of the cone for a heading.
fn cone_ranges(heading: Heading) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
    match heading {
        Heading::North => (-2..=-1, -1..=1),
        Heading::South => (1..=2, -1..=1),
        Heading::East => (-1..=1, 1..=2),
        Heading::West => (-1..=1, -2..=-1),
    }
}

/// The in-bounds cell at `(pos.row + dr, pos.col + dc)`, if any.
fn offset_cell(grid: &Grid, pos: Pos, dr: i64, dc: i64) -> Option<Pos> {
    let row = pos.row as i64 + dr;
    let col = pos.col as i64 + dc;
    if row < 0 || col < 0 {
        return None;
    }
    let cell = Pos::new(row as u32, col as u32);
    grid.contains(cell).then_some(cell)
}

/// Mark the cone ahead of `pose` as scanned, returning the number of cells
/// that were newly marked.
pub fn scan_at(grid: &mut Grid, pose: Pose) -> usize {
    let (rows, cols) = cone_ranges(pose.heading);
    let mut newly = 0;
    for dr in rows {
        for dc in cols.clone() {
            let Some(cell) = offset_cell(grid, pose.pos, dr, dc) else {
                continue;
            };
            if !grid.is_scanned(cell.row, cell.col) {
                grid.mark_scanned(cell.row, cell.col);
                newly += 1;
            }
        }
    }
    newly
}

/// How many cells a scan from `pose` *would* newly mark.
///
/// Pure — the planner's look-ahead predicates rely on this never touching
/// grid state.
pub fn preview_at(grid: &Grid, pose: Pose) -> usize {
    let (rows, cols) = cone_ranges(pose.heading);
    let mut would = 0;
    for dr in rows {
        for dc in cols.clone() {
            let Some(cell) = offset_cell(grid, pose.pos, dr, dc) else {
                continue;
            };
            if !grid.is_scanned(cell.row, cell.col) {
                would += 1;
            }
        }
    }
    would
}
