//! Plain data row types written by report backends.

use gs_core::{Heading, Move};
use gs_plan::PlanSummary;

/// One committed move and the scan that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow {
    /// 1-based move counter.
    pub step: u32,
    pub action: Move,
    /// Agent position after the move.
    pub row: u32,
    pub col: u32,
    pub heading: Heading,
    /// Cells newly marked by the trailing scan.
    pub new_scans: u32,
    /// Running scanned count after this step (includes the initial scan).
    pub scanned_total: u64,
}

/// Final counters for one plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub target_scans: u64,
    pub scanned_count: u64,
    pub total_moves: u32,
    pub move_limit: u32,
    pub traversable: u64,
    /// Scanned cells over traversable cells.
    pub coverage: f64,
}

impl From<&PlanSummary> for SummaryRow {
    fn from(summary: &PlanSummary) -> Self {
        Self {
            target_scans: summary.target_scans as u64,
            scanned_count: summary.scanned_count as u64,
            total_moves: summary.total_moves,
            move_limit: summary.move_limit,
            traversable: summary.traversable_count as u64,
            coverage: summary.coverage(),
        }
    }
}
