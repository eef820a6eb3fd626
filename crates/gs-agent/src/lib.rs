//! `gs-agent` — the mobile agent: a pose state machine over a borrowed grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`agent`] | `Agent` — turns, guarded forward moves, scanning      |
//! | [`scan`]  | The forward-cone sensor model (mark + pure preview)   |
//! | [`error`] | `AgentError`, `AgentResult<T>`                        |
//!
//! # Ownership
//!
//! The agent holds the session's one `&mut Grid` for as long as it lives, so
//! the "exclusive write by the active agent" discipline is enforced by the
//! borrow checker rather than by convention.  [`Agent::grid`] hands out a
//! shared borrow for read-only queries.

pub mod agent;
pub mod error;
pub mod scan;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
