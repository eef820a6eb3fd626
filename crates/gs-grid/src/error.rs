//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `gs-grid`.
///
/// Map *content* problems (bad tokens, wrong row widths) never surface here —
/// the loader recovers them locally with a warning.  Only an unreadable
/// source or a grid with no usable main region is fatal.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no main contiguous region found among {traversable} traversable cells")]
    NoMainRegion { traversable: usize },
}

pub type GridResult<T> = Result<T, GridError>;
