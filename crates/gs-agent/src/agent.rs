//! The agent state machine.

use tracing::debug;

use gs_core::{Heading, Pos, Pose};
use gs_grid::Grid;

use crate::scan;
use crate::{AgentError, AgentResult};

/// The mobile agent: a pose plus exclusive access to the grid it moves on.
///
/// Turning always succeeds and never consults the grid.  Moving forward is
/// guarded: the destination must be in bounds and traversable, and on
/// failure the pose is unchanged.  Scanning marks the forward cone on the
/// grid (see [`crate::scan`]).
pub struct Agent<'g> {
    grid: &'g mut Grid,
    pose: Pose,
}

impl<'g> Agent<'g> {
    /// Place an agent at `pose`.
    ///
    /// Fails with [`AgentError::InvalidStart`] if the cell is outside the
    /// grid or blocked — a pose is only meaningful on a traversable cell.
    pub fn new(grid: &'g mut Grid, pose: Pose) -> AgentResult<Self> {
        if !grid.contains(pose.pos) || !grid.is_traversable(pose.pos.row, pose.pos.col) {
            return Err(AgentError::InvalidStart { pose });
        }
        Ok(Self { grid, pose })
    }

    // ── Pose accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pose.pos
    }

    #[inline]
    pub fn row(&self) -> u32 {
        self.pose.pos.row
    }

    #[inline]
    pub fn col(&self) -> u32 {
        self.pose.pos.col
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    /// Shared view of the grid for read-only queries.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    // ── Primitive actions ─────────────────────────────────────────────────

    /// Rotate 90° counter-clockwise.  Always succeeds.
    pub fn turn_left(&mut self) {
        self.pose = self.pose.turned_left();
    }

    /// Rotate 90° clockwise.  Always succeeds.
    pub fn turn_right(&mut self) {
        self.pose = self.pose.turned_right();
    }

    /// Advance one cell in the current heading.
    ///
    /// The destination must lie within the grid and be traversable; on
    /// failure the pose is unchanged.
    pub fn move_forward(&mut self) -> AgentResult<()> {
        let Some(next) = self.pose.forward_pos() else {
            debug!(pose = %self.pose, "forward move rejected at grid edge");
            return Err(AgentError::OffGrid { pose: self.pose });
        };
        if !self.grid.contains(next) {
            debug!(pose = %self.pose, "forward move rejected at grid edge");
            return Err(AgentError::OffGrid { pose: self.pose });
        }
        if !self.grid.is_traversable(next.row, next.col) {
            debug!(pose = %self.pose, target = %next, "forward move rejected by blocked cell");
            return Err(AgentError::Blocked { pos: next });
        }

        self.pose = self.pose.at(next);
        debug_assert!(self.grid.is_traversable(self.pose.pos.row, self.pose.pos.col));
        Ok(())
    }

    /// Whether a forward move from the current pose would succeed.
    pub fn can_move_forward(&self) -> bool {
        self.forward_target().is_some()
    }

    /// The cell a forward move would land on, if it is in bounds and
    /// traversable.
    pub fn forward_target(&self) -> Option<Pos> {
        let next = self.pose.forward_pos()?;
        (self.grid.contains(next) && self.grid.is_traversable(next.row, next.col)).then_some(next)
    }

    /// Scan the forward cone, marking cells on the grid.  Returns the number
    /// of newly-scanned cells.
    pub fn scan(&mut self) -> usize {
        scan::scan_at(self.grid, self.pose)
    }

    /// How many cells a scan from `pose` would newly mark, without marking
    /// anything.  `pose` need not be the agent's own — the planner probes
    /// hypothetical poses one action ahead.
    pub fn scan_preview(&self, pose: Pose) -> usize {
        scan::preview_at(self.grid, pose)
    }
}
