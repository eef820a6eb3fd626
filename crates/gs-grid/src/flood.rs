//! Reachability normalization.
//!
//! A freshly loaded map may contain traversable pockets that are cut off
//! from the bulk of the terrain.  The planner must never target those, so
//! immediately after loading the grid is collapsed to a single contiguous
//! region: find a seed inside the dominant region, flood-fill `reachable`
//! from it, then demote every traversable cell the fill never reached.
//!
//! # Seed selection
//!
//! 1. Start at the grid's ceiling-midpoint cell.
//! 2. If that cell is blocked, BFS outward (through blocked cells too) to
//!    the nearest traversable cell.
//! 3. Validate the candidate: its 4-connected traversable region must hold
//!    at least [`MAIN_REGION_MIN_FRACTION`] of all traversable cells.
//! 4. Otherwise sweep row-major for the first traversable cell whose region
//!    passes; cells in already-rejected regions are skipped, so each region
//!    floods at most once.
//! 5. No region passes → [`GridError::NoMainRegion`].
//!
//! All fills use an explicit queue — on a 1000×1000 map a recursive fill
//! would overrun the stack long before it ran out of cells.

use std::collections::VecDeque;

use tracing::debug;

use gs_core::Pos;

use crate::{Grid, GridError, GridResult};

/// Minimum fraction of all traversable cells a candidate seed's region must
/// contain to count as the main region.
///
/// This is a pocket-rejection heuristic, not a coverage bound: it stops the
/// fill from seeding inside a small isolated pocket near the grid's centre.
pub const MAIN_REGION_MIN_FRACTION: f32 = 0.21;

/// Summary of one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// The accepted seed cell.
    pub seed: Pos,
    /// Cells in the main region (now the traversable count).
    pub region_len: usize,
    /// Isolated traversable cells demoted to blocked.
    pub demoted: usize,
}

/// Collapse `grid` to its main contiguous region.
///
/// On success every remaining traversable cell is marked `reachable` and is
/// 4-connected to every other; `traversable_count` reflects the demotions.
pub fn normalize(grid: &mut Grid) -> GridResult<NormalizeStats> {
    let traversable = grid.traversable_count();
    if traversable == 0 {
        return Err(GridError::NoMainRegion { traversable: 0 });
    }

    let threshold = (MAIN_REGION_MIN_FRACTION * traversable as f32).ceil() as usize;
    let (seed, region) = find_main_region(grid, threshold)
        .ok_or(GridError::NoMainRegion { traversable })?;

    let region_len = region.len();
    for pos in region {
        grid.mark_reachable(pos.row, pos.col);
    }

    // Demotion sweep: anything traversable the fill never reached is an
    // isolated pocket.
    let mut demoted = 0usize;
    for row in 0..grid.row_count() {
        for col in 0..grid.col_count() {
            if grid.is_traversable(row, col) && !grid.is_reachable(row, col) {
                debug!(row, col, "demoting isolated traversable cell");
                grid.demote_untraversable(row, col);
                demoted += 1;
            }
        }
    }

    Ok(NormalizeStats { seed, region_len, demoted })
}

// ── Seed search ───────────────────────────────────────────────────────────────

/// Find a seed whose traversable region holds at least `threshold` cells,
/// returning the seed and its region.
fn find_main_region(grid: &Grid, threshold: usize) -> Option<(Pos, Vec<Pos>)> {
    let cols = grid.col_count() as usize;
    let cell_count = grid.row_count() as usize * cols;
    let mut rejected = vec![false; cell_count];

    // Midpoint candidate: the ⌈R/2⌉-th row and ⌈C/2⌉-th column, 0-indexed.
    let mid = Pos::new(
        grid.row_count().div_ceil(2) - 1,
        grid.col_count().div_ceil(2) - 1,
    );
    let candidate = if grid.is_traversable(mid.row, mid.col) {
        Some(mid)
    } else {
        nearest_traversable(grid, mid)
    };

    if let Some(seed) = candidate {
        let region = traversable_region(grid, seed);
        if region.len() >= threshold {
            return Some((seed, region));
        }
        debug!(%seed, size = region.len(), threshold, "rejecting pocket seed");
        for pos in &region {
            rejected[pos.row as usize * cols + pos.col as usize] = true;
        }
    }

    // Fallback: row-major sweep, flooding each untried region at most once.
    for row in 0..grid.row_count() {
        for col in 0..grid.col_count() {
            if !grid.is_traversable(row, col) || rejected[row as usize * cols + col as usize] {
                continue;
            }
            let seed = Pos::new(row, col);
            let region = traversable_region(grid, seed);
            if region.len() >= threshold {
                return Some((seed, region));
            }
            debug!(%seed, size = region.len(), threshold, "rejecting pocket seed");
            for pos in &region {
                rejected[pos.row as usize * cols + pos.col as usize] = true;
            }
        }
    }

    None
}

/// BFS from `from` through any in-bounds cell to the nearest traversable one.
///
/// Returns `None` only when the grid has no traversable cells at all.
fn nearest_traversable(grid: &Grid, from: Pos) -> Option<Pos> {
    let cols = grid.col_count() as usize;
    let mut visited = vec![false; grid.row_count() as usize * cols];
    let mut queue = VecDeque::new();

    visited[from.row as usize * cols + from.col as usize] = true;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if grid.is_traversable(pos.row, pos.col) {
            return Some(pos);
        }
        for next in neighbors(grid, pos) {
            let i = next.row as usize * cols + next.col as usize;
            if !visited[i] {
                visited[i] = true;
                queue.push_back(next);
            }
        }
    }
    None
}

/// The 4-connected traversable region containing `seed`.
fn traversable_region(grid: &Grid, seed: Pos) -> Vec<Pos> {
    let cols = grid.col_count() as usize;
    let mut visited = vec![false; grid.row_count() as usize * cols];
    let mut queue = VecDeque::new();
    let mut region = Vec::new();

    visited[seed.row as usize * cols + seed.col as usize] = true;
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        region.push(pos);
        for next in neighbors(grid, pos) {
            let i = next.row as usize * cols + next.col as usize;
            if !visited[i] && grid.is_traversable(next.row, next.col) {
                visited[i] = true;
                queue.push_back(next);
            }
        }
    }
    region
}

/// In-bounds 4-connected neighbors of `pos`, in N, S, E, W order.
fn neighbors(grid: &Grid, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let Pos { row, col } = pos;
    [
        row.checked_sub(1).map(|r| Pos::new(r, col)),
        (row + 1 < grid.row_count()).then(|| Pos::new(row + 1, col)),
        (col + 1 < grid.col_count()).then(|| Pos::new(row, col + 1)),
        col.checked_sub(1).map(|c| Pos::new(row, c)),
    ]
    .into_iter()
    .flatten()
}
