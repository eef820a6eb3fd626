//! Grid coordinates and agent poses.
//!
//! Coordinates are 0-indexed `(row, col)` with `(0, 0)` at the top-left;
//! row increases southward, column increases eastward.  Both components are
//! `u32`, so negative positions are unrepresentable — stepping north off
//! row 0 is caught by [`Pose::forward_pos`] returning `None` rather than by
//! a signed bounds check downstream.

use std::fmt;

use crate::Heading;

// ── Pos ───────────────────────────────────────────────────────────────────────

/// A 0-indexed `(row, col)` grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: u32,
    pub col: u32,
}

impl Pos {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (taxicab) distance to `other`.
    ///
    /// This is the planner's nearest-target metric and the A* heuristic: a
    /// forward move changes exactly one coordinate by 1, so the Manhattan
    /// distance never overestimates the remaining action count.
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// An agent configuration: position plus heading.
///
/// `Pose` is a plain value — stepping and turning return new poses and never
/// consult a grid.  Bounds above zero and traversability are the grid's
/// business; only the zero edges are caught here, where unsigned arithmetic
/// would otherwise wrap.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Pos,
    pub heading: Heading,
}

impl Pose {
    #[inline]
    pub fn new(row: u32, col: u32, heading: Heading) -> Self {
        Self { pos: Pos::new(row, col), heading }
    }

    /// The cell one forward step ahead, or `None` when the step would leave
    /// the grid through the north or west edge.
    ///
    /// The south and east edges are not checked here — the caller compares
    /// against the grid's dimensions.
    #[inline]
    pub fn forward_pos(self) -> Option<Pos> {
        let (dr, dc) = self.heading.offset();
        let row = self.pos.row.checked_add_signed(dr as i32)?;
        let col = self.pos.col.checked_add_signed(dc as i32)?;
        Some(Pos::new(row, col))
    }

    /// The pose after stepping forward into `pos` (heading unchanged).
    #[inline]
    pub fn at(self, pos: Pos) -> Pose {
        Pose { pos, heading: self.heading }
    }

    /// The pose after a left turn (position unchanged).
    #[inline]
    pub fn turned_left(self) -> Pose {
        Pose { pos: self.pos, heading: self.heading.turned_left() }
    }

    /// The pose after a right turn (position unchanged).
    #[inline]
    pub fn turned_right(self) -> Pose {
        Pose { pos: self.pos, heading: self.heading.turned_right() }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.pos, self.heading)
    }
}
