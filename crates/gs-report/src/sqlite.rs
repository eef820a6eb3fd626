//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `move_log` and `coverage_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{MoveRow, ReportResult, SummaryRow};

/// Writes plan output to an SQLite database.
pub struct SqliteReporter {
    conn: Connection,
    finished: bool,
}

impl SqliteReporter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS move_log (
                 step          INTEGER PRIMARY KEY,
                 action        TEXT    NOT NULL,
                 row           INTEGER NOT NULL,
                 col           INTEGER NOT NULL,
                 heading       TEXT    NOT NULL,
                 new_scans     INTEGER NOT NULL,
                 scanned_total INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS coverage_summary (
                 target_scans  INTEGER NOT NULL,
                 scanned_count INTEGER NOT NULL,
                 total_moves   INTEGER NOT NULL,
                 move_limit    INTEGER NOT NULL,
                 traversable   INTEGER NOT NULL,
                 coverage      REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReporter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO move_log \
                 (step, action, row, col, heading, new_scans, scanned_total) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.action.to_string(),
                    row.row,
                    row.col,
                    row.heading.to_string(),
                    row.new_scans,
                    row.scanned_total as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()> {
        self.conn.execute(
            "INSERT INTO coverage_summary \
             (target_scans, scanned_count, total_moves, move_limit, traversable, coverage) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.target_scans as i64,
                row.scanned_count as i64,
                row.total_moves,
                row.move_limit,
                row.traversable as i64,
                row.coverage,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
