//! CSV map loader.
//!
//! # Input format
//!
//! Newline-separated rows of comma-separated tokens, no header:
//!
//! ```csv
//! 1,0,1,1
//! 1,1,1,0
//! ```
//!
//! `"1"` is traversable, `"0"` is blocked.  Field data is treated as
//! untrusted: any other token (out-of-range integer or non-numeric) becomes
//! a blocked cell with a warning, short rows are padded with blocked cells,
//! long rows are truncated.  The declared `width` is authoritative for the
//! column count; the row count is whatever the source yields.
//!
//! Loading fails only when the source itself cannot be read.

use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::{Cell, Grid, GridResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Grid`] from a CSV file with the declared `width`.
pub fn load_path(path: &Path, width: u32) -> GridResult<Grid> {
    let file = std::fs::File::open(path)?;
    load_reader(file, width)
}

/// Like [`load_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for maps embedded in the
/// host application.
pub fn load_reader<R: Read>(reader: R, width: u32) -> GridResult<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // row widths are enforced below, not by the parser
        .from_reader(reader);

    let width_usize = width as usize;
    let mut cells: Vec<Cell> = Vec::new();
    let mut rows: u32 = 0;

    // Byte records + lossy UTF-8: malformed bytes degrade to bad tokens
    // (warn-and-block) instead of aborting the whole load.
    for result in csv_reader.byte_records() {
        let record = result?;
        let row = rows;

        for (col, field) in record.iter().take(width_usize).enumerate() {
            cells.push(parse_token(field, row, col));
        }

        let got = record.len();
        if got < width_usize {
            warn!(row, got, width, "short row; padding with blocked cells");
            cells.extend(std::iter::repeat_n(Cell::with_traversable(false), width_usize - got));
        } else if got > width_usize {
            warn!(row, got, width, "long row; truncating extra cells");
        }

        rows += 1;
    }

    Ok(Grid::from_cells(cells, rows, width))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Interpret one field: `1` traversable, `0` blocked, anything else blocked
/// with a warning.
fn parse_token(field: &[u8], row: u32, col: usize) -> Cell {
    let token = String::from_utf8_lossy(field);
    match token.trim().parse::<i64>() {
        Ok(1) => Cell::with_traversable(true),
        Ok(0) => Cell::with_traversable(false),
        Ok(n) => {
            warn!(row, col, value = n, "cell value out of range; treating as blocked");
            Cell::with_traversable(false)
        }
        Err(_) => {
            warn!(row, col, token = %token.trim(), "non-numeric cell value; treating as blocked");
            Cell::with_traversable(false)
        }
    }
}
