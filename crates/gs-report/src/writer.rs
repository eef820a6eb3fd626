//! The `ReportWriter` trait implemented by all backend writers.

use crate::{MoveRow, ReportResult, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the recorder's perspective — errors are
/// stored internally and retrieved with
/// [`PlanRecorder::take_error`][crate::PlanRecorder::take_error].
pub trait ReportWriter {
    /// Write a batch of move rows.
    fn write_moves(&mut self, rows: &[MoveRow]) -> ReportResult<()>;

    /// Write the plan summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
