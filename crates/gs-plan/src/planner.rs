//! The coverage planner.

use tracing::{debug, info, warn};

use gs_agent::Agent;
use gs_core::{Move, Pos, Pose};
use gs_grid::Grid;

use crate::observer::{NoopObserver, PlanObserver};
use crate::{astar, PlanResult};

/// Lower clamp for the search fraction (1% coverage).
pub const MIN_SEARCH_FRACTION: f32 = 0.01;
/// Upper clamp for the search fraction (full coverage).
pub const MAX_SEARCH_FRACTION: f32 = 1.0;

// ── PlanSummary ───────────────────────────────────────────────────────────────

/// Outcome counters for one plan, retrievable at any point via
/// [`Planner::summary`] and delivered to observers on finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSummary {
    /// Cells that had to be scanned: `⌈search_fraction · traversable⌉`.
    pub target_scans: usize,
    /// Cells newly scanned so far (blocked cells observed by the cone count
    /// too).
    pub scanned_count: usize,
    /// Primitives committed so far.
    pub total_moves: u32,
    /// The clamped move budget.
    pub move_limit: u32,
    /// Traversable cells at plan start.
    pub traversable_count: usize,
}

impl PlanSummary {
    /// Scanned cells as a fraction of traversable cells.
    pub fn coverage(&self) -> f64 {
        if self.traversable_count == 0 {
            return 0.0;
        }
        self.scanned_count as f64 / self.traversable_count as f64
    }

    /// Whether the scan target was reached.
    pub fn target_met(&self) -> bool {
        self.scanned_count >= self.target_scans
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Greedy sweep planner with A* rerouting.
///
/// Owns the [`Agent`] (and through it the session's `&mut Grid`) for the
/// duration of one plan.  Construct, call [`find_route`][Self::find_route]
/// once, then read the log and [`summary`][Self::summary].
pub struct Planner<'g> {
    agent: Agent<'g>,
    search_fraction: f32,
    move_limit: u32,
    target_scans: usize,
    scanned_count: usize,
    total_moves: u32,
    move_log: Vec<Move>,
}

impl<'g> Planner<'g> {
    /// Create a planner for `agent`.
    ///
    /// `search_fraction` is clamped into
    /// [[`MIN_SEARCH_FRACTION`], [`MAX_SEARCH_FRACTION`]] and `move_limit`
    /// up to 1, each with a warning — hosts pass these straight from user
    /// input.
    pub fn new(agent: Agent<'g>, search_fraction: f32, move_limit: u32) -> Self {
        let search_fraction = if search_fraction < MIN_SEARCH_FRACTION {
            warn!(
                requested = search_fraction as f64,
                "search fraction below {MIN_SEARCH_FRACTION}; clamping up"
            );
            MIN_SEARCH_FRACTION
        } else if search_fraction > MAX_SEARCH_FRACTION {
            warn!(
                requested = search_fraction as f64,
                "search fraction above {MAX_SEARCH_FRACTION}; clamping down"
            );
            MAX_SEARCH_FRACTION
        } else {
            search_fraction
        };

        let move_limit = if move_limit < 1 {
            warn!("move limit of 0; clamping up to 1");
            1
        } else {
            move_limit
        };

        let target_scans =
            (search_fraction * agent.grid().traversable_count() as f32).ceil() as usize;

        Self {
            agent,
            search_fraction,
            move_limit,
            target_scans,
            scanned_count: 0,
            total_moves: 0,
            move_log: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The clamped search fraction.
    #[inline]
    pub fn search_fraction(&self) -> f32 {
        self.search_fraction
    }

    /// The clamped move budget.
    #[inline]
    pub fn move_limit(&self) -> u32 {
        self.move_limit
    }

    /// The agent (and through it the grid), read-only.
    #[inline]
    pub fn agent(&self) -> &Agent<'g> {
        &self.agent
    }

    /// Current outcome counters.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            target_scans: self.target_scans,
            scanned_count: self.scanned_count,
            total_moves: self.total_moves,
            move_limit: self.move_limit,
            traversable_count: self.agent.grid().traversable_count(),
        }
    }

    /// Row of the nearest unscanned traversable cell, by Manhattan distance
    /// from the agent.
    pub fn nearest_unscanned_row(&self) -> Option<u32> {
        self.nearest_unscanned().map(|pos| pos.row)
    }

    /// Column of the nearest unscanned traversable cell.
    pub fn nearest_unscanned_col(&self) -> Option<u32> {
        self.nearest_unscanned().map(|pos| pos.col)
    }

    /// The nearest unscanned traversable cell by Manhattan distance; ties
    /// resolve to the first in row-major order.
    pub fn nearest_unscanned(&self) -> Option<Pos> {
        let grid = self.agent.grid();
        let from = self.agent.pos();

        let mut best: Option<(u32, Pos)> = None;
        for row in 0..grid.row_count() {
            for col in 0..grid.col_count() {
                if !grid.is_traversable(row, col) || grid.is_scanned(row, col) {
                    continue;
                }
                let pos = Pos::new(row, col);
                let distance = from.manhattan(pos);
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, pos));
                }
            }
        }
        best.map(|(_, pos)| pos)
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Run the plan and return the ordered move log.
    pub fn find_route(&mut self) -> PlanResult<Vec<Move>> {
        self.find_route_with(&mut NoopObserver)
    }

    /// Like [`find_route`][Self::find_route], streaming progress to
    /// `observer`.
    pub fn find_route_with<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<Vec<Move>> {
        // Free initial scan at the starting pose.
        let initial = self.agent.scan();
        self.scanned_count += initial;
        info!(
            pose = %self.agent.pose(),
            new_scans = initial,
            target = self.target_scans,
            limit = self.move_limit,
            "plan started"
        );
        observer.on_start(self.agent.pose(), initial);

        while !self.done() {
            if self.try_advance(observer)? {
                continue;
            }
            if self.try_turn_then_advance(Move::TurnLeft, observer)? {
                continue;
            }
            if self.try_turn_then_advance(Move::TurnRight, observer)? {
                continue;
            }
            if !self.reroute(observer)? {
                break; // coverage unreachable under current state
            }
        }

        let summary = self.summary();
        info!(
            scanned = summary.scanned_count,
            target = summary.target_scans,
            moves = summary.total_moves,
            "plan finished"
        );
        observer.on_finish(&summary);
        Ok(self.move_log.clone())
    }

    #[inline]
    fn done(&self) -> bool {
        self.scanned_count >= self.target_scans || self.total_moves >= self.move_limit
    }

    /// Commit one primitive: execute, count, log, scan, notify.
    fn commit<O: PlanObserver>(&mut self, action: Move, observer: &mut O) -> PlanResult<()> {
        match action {
            Move::Forward => self.agent.move_forward()?,
            Move::TurnLeft => self.agent.turn_left(),
            Move::TurnRight => self.agent.turn_right(),
        }
        self.total_moves += 1;
        self.move_log.push(action);

        let new_scans = self.agent.scan();
        self.scanned_count += new_scans;
        debug!(
            step = self.total_moves,
            action = %action,
            pose = %self.agent.pose(),
            new_scans,
            scanned = self.scanned_count,
            "committed move"
        );
        observer.on_move(self.total_moves, action, self.agent.pose(), new_scans);
        Ok(())
    }

    /// Branch ①: step forward if the move is open and the cone from the new
    /// cell would mark something.
    fn try_advance<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<bool> {
        let Some(next) = self.agent.forward_target() else {
            return Ok(false);
        };
        if self.agent.scan_preview(self.agent.pose().at(next)) == 0 {
            return Ok(false);
        }
        self.commit(Move::Forward, observer)?;
        Ok(true)
    }

    /// Branches ② and ③: turn if a forward move would then be open and
    /// productive, and advance while the budget allows.
    fn try_turn_then_advance<O: PlanObserver>(
        &mut self,
        turn: Move,
        observer: &mut O,
    ) -> PlanResult<bool> {
        let turned = match turn {
            Move::TurnLeft => self.agent.pose().turned_left(),
            Move::TurnRight => self.agent.pose().turned_right(),
            Move::Forward => return Ok(false),
        };
        let Some(next) = valid_forward(self.agent.grid(), turned) else {
            return Ok(false);
        };
        if self.agent.scan_preview(turned.at(next)) == 0 {
            return Ok(false);
        }

        self.commit(turn, observer)?;
        // The turn's own scan may have met the target or spent the budget.
        if !self.done() && self.agent.forward_target().is_some() {
            self.commit(Move::Forward, observer)?;
        }
        Ok(true)
    }

    /// Branch ④: A* to the nearest unscanned traversable cell and execute
    /// the path, scanning after every action.
    ///
    /// Returns `false` when no target remains or no path exists — the signal
    /// to stop planning.
    fn reroute<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<bool> {
        let Some(target) = self.nearest_unscanned() else {
            warn!("greedy sweep stalled with no unscanned traversable cells left");
            return Ok(false);
        };

        let path = astar::shortest_path(self.agent.grid(), self.agent.pose(), target);
        info!(%target, path_len = path.len(), "rerouting to nearest unscanned cell");
        observer.on_reroute(target, path.len());

        if path.is_empty() {
            warn!(%target, "no path to target; coverage unreachable under current state");
            return Ok(false);
        }

        for action in path {
            if self.done() {
                break;
            }
            self.commit(action, observer)?;
        }
        Ok(true)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The forward cell of a hypothetical pose, if it is in bounds and
/// traversable.
fn valid_forward(grid: &Grid, pose: Pose) -> Option<Pos> {
    let next = pose.forward_pos()?;
    (grid.contains(next) && grid.is_traversable(next.row, next.col)).then_some(next)
}
