//! The per-cell flag triple.

/// One grid cell.
///
/// The three flags are independent:
///
/// - `traversable` — the agent may occupy this cell.
/// - `scanned` — the sensor has observed this cell at least once.  The
///   scanner marks blocked cells too; a scanned non-traversable cell reads
///   as "observed blocked space".
/// - `reachable` — set once by [`flood::normalize`][crate::flood::normalize]
///   for cells in the main contiguous region, never cleared.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub traversable: bool,
    pub scanned: bool,
    pub reachable: bool,
}

impl Cell {
    /// An unscanned, unreached cell with the given traversability.
    #[inline]
    pub fn with_traversable(traversable: bool) -> Self {
        Self { traversable, scanned: false, reachable: false }
    }
}
