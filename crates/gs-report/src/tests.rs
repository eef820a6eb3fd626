//! Unit tests for gs-report.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use gs_agent::Agent;
    use gs_core::{Heading, Pose};
    use gs_plan::{PlanObserver, Planner};

    /// Run a full-coverage plan on an open 5×5 field, streaming to `obs`.
    pub fn run_small_plan<O: PlanObserver>(obs: &mut O) -> usize {
        let csv = "1,1,1,1,1\n".repeat(5);
        let mut grid = gs_grid::load_reader(Cursor::new(csv), 5).unwrap();
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 200);
        let log = planner.find_route_with(obs).unwrap();
        log.len()
    }
}

#[cfg(test)]
mod recorder {
    use gs_plan::PlanSummary;

    use crate::writer::ReportWriter;
    use crate::{MoveRow, PlanRecorder, ReportError, ReportResult, SummaryRow};

    /// In-memory writer capturing everything it is handed.
    #[derive(Default)]
    struct MemWriter {
        moves: Vec<MoveRow>,
        summary: Option<SummaryRow>,
        finishes: u32,
    }

    impl ReportWriter for MemWriter {
        fn write_moves(&mut self, rows: &[MoveRow]) -> ReportResult<()> {
            self.moves.extend_from_slice(rows);
            Ok(())
        }
        fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()> {
            self.summary = Some(*row);
            Ok(())
        }
        fn finish(&mut self) -> ReportResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn records_every_move_and_the_summary() {
        let mut recorder = PlanRecorder::new(MemWriter::default());
        let move_count = super::helpers::run_small_plan(&mut recorder);

        assert!(recorder.take_error().is_none());
        let writer = recorder.into_writer();

        assert_eq!(writer.moves.len(), move_count);
        assert_eq!(writer.finishes, 1);

        // Steps are 1-based and consecutive.
        for (i, row) in writer.moves.iter().enumerate() {
            assert_eq!(row.step as usize, i + 1);
        }

        // The running total in the last row matches the summary.
        let summary = writer.summary.expect("summary written");
        let last = writer.moves.last().expect("at least one move");
        assert_eq!(last.scanned_total, summary.scanned_count);
        assert_eq!(summary.total_moves as usize, move_count);
        assert_eq!(summary.traversable, 25);
        assert!(summary.coverage > 0.99);
    }

    /// Writer whose every call fails.
    struct FailingWriter;

    impl ReportWriter for FailingWriter {
        fn write_moves(&mut self, _rows: &[MoveRow]) -> ReportResult<()> {
            Err(std::io::Error::other("disk gone").into())
        }
        fn write_summary(&mut self, _row: &SummaryRow) -> ReportResult<()> {
            Err(std::io::Error::other("disk still gone").into())
        }
        fn finish(&mut self) -> ReportResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_writer_error_is_kept() {
        let mut recorder = PlanRecorder::new(FailingWriter);
        super::helpers::run_small_plan(&mut recorder);

        let err = recorder.take_error().expect("error stored");
        assert!(matches!(err, ReportError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk gone");
        // Taken once; gone afterwards.
        assert!(recorder.take_error().is_none());
    }

    #[test]
    fn summary_row_conversion() {
        let summary = PlanSummary {
            target_scans: 50,
            scanned_count: 52,
            total_moves: 40,
            move_limit: 100,
            traversable_count: 80,
        };
        let row = SummaryRow::from(&summary);
        assert_eq!(row.target_scans, 50);
        assert_eq!(row.scanned_count, 52);
        assert_eq!(row.total_moves, 40);
        assert_eq!(row.move_limit, 100);
        assert_eq!(row.traversable, 80);
        assert!((row.coverage - 0.65).abs() < 1e-9);
    }
}

#[cfg(test)]
mod csv_backend {
    use crate::{CsvReporter, PlanRecorder};

    #[test]
    fn writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvReporter::new(dir.path()).unwrap();
        let mut recorder = PlanRecorder::new(writer);

        let move_count = super::helpers::run_small_plan(&mut recorder);
        assert!(recorder.take_error().is_none());

        let moves = std::fs::read_to_string(dir.path().join("move_log.csv")).unwrap();
        let mut lines = moves.lines();
        assert_eq!(
            lines.next().unwrap(),
            "step,action,row,col,heading,new_scans,scanned_total"
        );
        assert_eq!(lines.count(), move_count);

        let summary =
            std::fs::read_to_string(dir.path().join("coverage_summary.csv")).unwrap();
        let mut lines = summary.lines();
        assert_eq!(
            lines.next().unwrap(),
            "target_scans,scanned_count,total_moves,move_limit,traversable,coverage"
        );
        assert_eq!(lines.count(), 1);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_backend {
    use crate::{PlanRecorder, SqliteReporter};

    #[test]
    fn writes_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SqliteReporter::new(dir.path()).unwrap();
        let mut recorder = PlanRecorder::new(writer);

        let move_count = super::helpers::run_small_plan(&mut recorder);
        assert!(recorder.take_error().is_none());
        drop(recorder);

        let conn = rusqlite::Connection::open(dir.path().join("report.db")).unwrap();
        let moves: i64 = conn
            .query_row("SELECT COUNT(*) FROM move_log", [], |r| r.get(0))
            .unwrap();
        assert_eq!(moves as usize, move_count);

        let summaries: i64 = conn
            .query_row("SELECT COUNT(*) FROM coverage_summary", [], |r| r.get(0))
            .unwrap();
        assert_eq!(summaries, 1);

        let scanned: i64 = conn
            .query_row("SELECT scanned_count FROM coverage_summary", [], |r| r.get(0))
            .unwrap();
        assert_eq!(scanned, 25);
    }
}
