//! Error types for step execution.
//!
//! [`RuleError`] is what injected domain logic returns; [`StepError`] is
//! what the engine returns to its caller, wrapping a `RuleError` together
//! with the name of the logic that produced it.

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Errors from injected step logic or termination policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The step logic failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A domain constraint was violated (e.g. an agent found on a cell
    /// it cannot occupy).
    ConstraintViolation {
        /// Description of the violated constraint.
        constraint: String,
    },
}

impl RuleError {
    /// Shorthand for [`RuleError::ExecutionFailed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::ConstraintViolation { constraint } => {
                write!(f, "constraint violation: {constraint}")
            }
        }
    }
}

impl Error for RuleError {}

/// Errors from the step engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// Injected step logic returned an error. The step was abandoned;
    /// in synchronous mode the next-generation buffer is discarded, in
    /// asynchronous mode mutations made before the failure remain.
    RuleFailed {
        /// Name of the failing step logic.
        name: String,
        /// The underlying error, unchanged.
        reason: RuleError,
    },
    /// Two storages bound to one stepper disagree on grid structure.
    StructureMismatch,
    /// Two storages bound to one stepper disagree on the default entity.
    DefaultMismatch,
    /// An entity reporting [`EntityKind::Agent`](crate::EntityKind::Agent)
    /// has no [`agent_id`](crate::GridEntity::agent_id), so it cannot be
    /// scheduled in an ordered step.
    AgentWithoutId {
        /// Where the entity sits.
        coord: Coord,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleFailed { name, reason } => write!(f, "step logic '{name}' failed: {reason}"),
            Self::StructureMismatch => {
                write!(f, "current and next storage have different grid structures")
            }
            Self::DefaultMismatch => {
                write!(f, "current and next storage have different default entities")
            }
            Self::AgentWithoutId { coord } => {
                write!(f, "agent at {coord} has no agent id")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RuleFailed { reason, .. } => Some(reason),
            Self::StructureMismatch | Self::DefaultMismatch | Self::AgentWithoutId { .. } => None,
        }
    }
}
