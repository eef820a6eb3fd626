//! `gs-plan` — the coverage planner.
//!
//! # Policy
//!
//! ```text
//! scan once at the start, then until target or budget:
//!   ① Advance            — forward is open and would scan new cells
//!   ② Turn-then-advance  — left preferred, then right
//!   ③ Reroute            — A* to the nearest unscanned traversable cell,
//!                          executing the path one action at a time
//! every committed action is logged, counted, and followed by a scan
//! ```
//!
//! An empty reroute with coverage unmet means the remaining cells cannot be
//! reached under the current state; the planner stops and returns the
//! partial move log.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`planner`]  | `Planner`, `PlanSummary`, clamping constants        |
//! | [`astar`]    | Pose-space A* shortest path                         |
//! | [`observer`] | `PlanObserver` progress callbacks, `NoopObserver`   |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                        |

pub mod astar;
pub mod error;
pub mod observer;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{Planner, PlanSummary, MAX_SEARCH_FRACTION, MIN_SEARCH_FRACTION};
