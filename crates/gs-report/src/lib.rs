//! `gs-report` — plan output writers for the gridsweep engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                           |
//! |----------|---------|-----------------------------------------|
//! | *(none)* | CSV     | `move_log.csv`, `coverage_summary.csv`  |
//! | `sqlite` | SQLite  | `report.db`                             |
//!
//! Both backends implement [`ReportWriter`] and are driven by
//! [`PlanRecorder`], which implements `gs_plan::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_report::{CsvReporter, PlanRecorder};
//!
//! let writer = CsvReporter::new(Path::new("./output"))?;
//! let mut recorder = PlanRecorder::new(writer);
//! planner.find_route_with(&mut recorder)?;
//! recorder.take_error().map(|e| eprintln!("report error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use self::csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use recorder::PlanRecorder;
pub use row::{MoveRow, SummaryRow};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReporter;
