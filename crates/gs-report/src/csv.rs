//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `move_log.csv`
//! - `coverage_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{MoveRow, ReportResult, SummaryRow};

/// Writes plan output to two CSV files.
pub struct CsvReporter {
    moves: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvReporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut moves = Writer::from_path(dir.join("move_log.csv"))?;
        moves.write_record([
            "step",
            "action",
            "row",
            "col",
            "heading",
            "new_scans",
            "scanned_total",
        ])?;

        let mut summary = Writer::from_path(dir.join("coverage_summary.csv"))?;
        summary.write_record([
            "target_scans",
            "scanned_count",
            "total_moves",
            "move_limit",
            "traversable",
            "coverage",
        ])?;

        Ok(Self { moves, summary, finished: false })
    }
}

impl ReportWriter for CsvReporter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> ReportResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.step.to_string(),
                row.action.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.heading.to_string(),
                row.new_scans.to_string(),
                row.scanned_total.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()> {
        self.summary.write_record(&[
            row.target_scans.to_string(),
            row.scanned_count.to_string(),
            row.total_moves.to_string(),
            row.move_limit.to_string(),
            row.traversable.to_string(),
            format!("{:.4}", row.coverage),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
