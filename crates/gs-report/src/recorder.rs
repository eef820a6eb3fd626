//! `PlanRecorder<W>` — bridges `PlanObserver` to a `ReportWriter`.

use gs_core::{Move, Pos, Pose};
use gs_plan::{PlanObserver, PlanSummary};

use crate::row::{MoveRow, SummaryRow};
use crate::writer::ReportWriter;
use crate::ReportError;

/// A [`PlanObserver`] that records every committed move and writes the full
/// report to any [`ReportWriter`] backend when the plan finishes.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After planning returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct PlanRecorder<W: ReportWriter> {
    writer: W,
    rows: Vec<MoveRow>,
    scanned_total: u64,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> PlanRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
            scanned_total: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after planning returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the plan).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> PlanObserver for PlanRecorder<W> {
    fn on_start(&mut self, _pose: Pose, initial_scans: usize) {
        self.scanned_total += initial_scans as u64;
    }

    fn on_move(&mut self, step: u32, action: Move, pose: Pose, new_scans: usize) {
        self.scanned_total += new_scans as u64;
        self.rows.push(MoveRow {
            step,
            action,
            row: pose.pos.row,
            col: pose.pos.col,
            heading: pose.heading,
            new_scans: new_scans as u32,
            scanned_total: self.scanned_total,
        });
    }

    fn on_reroute(&mut self, _target: Pos, _path_len: usize) {}

    fn on_finish(&mut self, summary: &PlanSummary) {
        let moves = std::mem::take(&mut self.rows);
        let result = self.writer.write_moves(&moves);
        self.store_err(result);
        let result = self.writer.write_summary(&SummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
