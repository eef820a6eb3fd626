//! Row-major grid storage and queries.
//!
//! # Data layout
//!
//! Cells live in one flat `Vec<Cell>` indexed `row * cols + col` — iteration
//! over a row is a contiguous memory scan, and the whole grid fits one
//! allocation.  Dimensions are fixed at construction: `cols` is the declared
//! map width, `rows` is however many rows the source produced.
//!
//! # Index discipline
//!
//! Every coordinate-taking method asserts `is_within_bounds` first.  An
//! out-of-range index is a programmer error in the caller, not a recoverable
//! condition — planner and agent code always gate on bounds before querying.

use std::io::{self, Write};

use gs_core::Pos;

use crate::Cell;

/// A rectangular occupancy grid of [`Cell`]s.
///
/// Constructed by [`loader::load_path`][crate::loader::load_path] (or the
/// reader variant) and mutated only through the three flag transitions:
/// [`mark_scanned`][Self::mark_scanned],
/// [`mark_reachable`][Self::mark_reachable], and
/// [`demote_untraversable`][Self::demote_untraversable].
pub struct Grid {
    /// Row-major cell storage, length `rows * cols`.
    cells: Vec<Cell>,
    rows: u32,
    cols: u32,
    /// Count of currently traversable cells, maintained across demotions.
    traversable: usize,
}

impl Grid {
    /// Assemble a grid from row-major cells.  The loader guarantees
    /// `cells.len() == rows * cols`.
    pub(crate) fn from_cells(cells: Vec<Cell>, rows: u32, cols: u32) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        let traversable = cells.iter().filter(|c| c.traversable).count();
        Self { cells, rows, cols, traversable }
    }

    #[inline]
    fn idx(&self, row: u32, col: u32) -> usize {
        assert!(
            self.is_within_bounds(row, col),
            "grid index ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols,
        );
        row as usize * self.cols as usize + col as usize
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn col_count(&self) -> u32 {
        self.cols
    }

    /// Number of currently traversable cells.
    #[inline]
    pub fn traversable_count(&self) -> usize {
        self.traversable
    }

    #[inline]
    pub fn is_within_bounds(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Bounds check for a [`Pos`].
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.is_within_bounds(pos.row, pos.col)
    }

    // ── Flag queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn is_traversable(&self, row: u32, col: u32) -> bool {
        self.cells[self.idx(row, col)].traversable
    }

    #[inline]
    pub fn is_scanned(&self, row: u32, col: u32) -> bool {
        self.cells[self.idx(row, col)].scanned
    }

    #[inline]
    pub fn is_reachable(&self, row: u32, col: u32) -> bool {
        self.cells[self.idx(row, col)].reachable
    }

    /// A copy of the cell at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells[self.idx(row, col)]
    }

    // ── Flag transitions ──────────────────────────────────────────────────

    /// Mark `(row, col)` as observed.  Idempotent; scanned is never cleared.
    #[inline]
    pub fn mark_scanned(&mut self, row: u32, col: u32) {
        let i = self.idx(row, col);
        self.cells[i].scanned = true;
    }

    /// Mark `(row, col)` as part of the main contiguous region.  Set-once;
    /// reachable is never cleared.
    #[inline]
    pub fn mark_reachable(&mut self, row: u32, col: u32) {
        let i = self.idx(row, col);
        self.cells[i].reachable = true;
    }

    /// Demote `(row, col)` to non-traversable, keeping `traversable_count`
    /// in step.  No-op if the cell is already non-traversable.
    pub fn demote_untraversable(&mut self, row: u32, col: u32) {
        let i = self.idx(row, col);
        if self.cells[i].traversable {
            self.cells[i].traversable = false;
            self.traversable -= 1;
        }
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Draw the grid to `out`, one row per line:
    /// `#` blocked, `*` scanned traversable, `.` unscanned traversable.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            let start = row as usize * self.cols as usize;
            let line: String = self.cells[start..start + self.cols as usize]
                .iter()
                .map(|c| match (c.traversable, c.scanned) {
                    (false, _) => '#',
                    (true, true) => '*',
                    (true, false) => '.',
                })
                .collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Emit dimension and coverage statistics to `out`.
    pub fn stats<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let scanned = self.cells.iter().filter(|c| c.scanned).count();
        let reachable = self.cells.iter().filter(|c| c.reachable).count();
        let scanned_traversable = self
            .cells
            .iter()
            .filter(|c| c.scanned && c.traversable)
            .count();

        writeln!(out, "grid: {} rows x {} cols", self.rows, self.cols)?;
        writeln!(out, "  traversable: {}", self.traversable)?;
        writeln!(out, "  reachable:   {reachable}")?;
        writeln!(out, "  scanned:     {scanned} ({scanned_traversable} traversable)")?;
        if self.traversable > 0 {
            writeln!(
                out,
                "  coverage:    {:.1}%",
                100.0 * scanned_traversable as f64 / self.traversable as f64
            )?;
        }
        Ok(())
    }
}
