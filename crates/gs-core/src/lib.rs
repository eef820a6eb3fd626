//! `gs-core` — foundational types for the gridsweep coverage engine.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`heading`] | `Heading` — the four cardinal facings             |
//! | [`moves`]   | `Move` — the three primitive actions              |
//! | [`pos`]     | `Pos`, `Pose` — grid coordinates and agent poses  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod heading;
pub mod moves;
pub mod pos;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use heading::Heading;
pub use moves::Move;
pub use pos::{Pos, Pose};
