//! Planner error type.

use thiserror::Error;

use gs_agent::AgentError;

/// Errors produced by `gs-plan`.
///
/// Every primitive the planner commits is gated by the same validity check
/// the search used, so the `Agent` variant is unreachable while the planner
/// holds the only mutable grid borrow.  The signature keeps it anyway: if a
/// future host mutates the world mid-plan, the bug surfaces as an error
/// instead of a silent bad log.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("agent rejected a planned move: {0}")]
    Agent(#[from] AgentError),
}

pub type PlanResult<T> = Result<T, PlanError>;
