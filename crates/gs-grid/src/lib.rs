//! `gs-grid` — the occupancy grid and its two ingestion stages.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`cell`]   | `Cell` — the traversable/scanned/reachable flag triple    |
//! | [`grid`]   | `Grid` — row-major cell storage, queries, diagnostics     |
//! | [`loader`] | `load_path` / `load_reader` — warn-and-recover CSV intake |
//! | [`flood`]  | `normalize` — main-region flood-fill and demotion sweep   |
//! | [`error`]  | `GridError`, `GridResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! CSV source ──load──▶ Grid ──normalize──▶ Grid (stable)
//! ```
//!
//! After [`flood::normalize`] every traversable cell is reachable from every
//! other via 4-connected traversable paths; the planner never has to reason
//! about isolated pockets.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                        |
//! |---------|-----------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Cell`.  |

pub mod cell;
pub mod error;
pub mod flood;
pub mod grid;
pub mod loader;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use flood::{normalize, NormalizeStats, MAIN_REGION_MIN_FRACTION};
pub use grid::Grid;
pub use loader::{load_path, load_reader};
