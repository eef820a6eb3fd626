//! Plan observer trait for progress reporting and move-log collection.

use gs_core::{Move, Pos, Pose};

use crate::PlanSummary;

/// Callbacks invoked by [`Planner::find_route_with`][crate::Planner::find_route_with]
/// as the plan executes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl PlanObserver for StepPrinter {
///     fn on_move(&mut self, step: u32, action: Move, pose: Pose, new_scans: usize) {
///         println!("{step:>5}  {action:<10} → {pose} (+{new_scans})");
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once after the free initial scan, before any move commits.
    fn on_start(&mut self, _pose: Pose, _initial_scans: usize) {}

    /// Called after each committed primitive and its trailing scan.
    ///
    /// `step` is the 1-based move count; `pose` is the pose after the move.
    fn on_move(&mut self, _step: u32, _action: Move, _pose: Pose, _new_scans: usize) {}

    /// Called when the greedy sweep stalls and an A* reroute is computed.
    ///
    /// `path_len == 0` means the target is unreachable and the plan is about
    /// to stop.
    fn on_reroute(&mut self, _target: Pos, _path_len: usize) {}

    /// Called once when planning ends, whatever the reason.
    fn on_finish(&mut self, _summary: &PlanSummary) {}
}

/// A [`PlanObserver`] that does nothing.  Used by
/// [`Planner::find_route`][crate::Planner::find_route] when the caller only
/// wants the move log.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
