//! Agent-subsystem error type.

use thiserror::Error;

use gs_core::{Pos, Pose};

/// Errors produced by `gs-agent`.
///
/// A failed move leaves the pose unchanged — callers may retry with a
/// different action.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("start pose {pose} is outside the grid or on a blocked cell")]
    InvalidStart { pose: Pose },

    #[error("forward move from {pose} leaves the grid")]
    OffGrid { pose: Pose },

    #[error("forward move into blocked cell {pos}")]
    Blocked { pos: Pos },
}

pub type AgentResult<T> = Result<T, AgentError>;
