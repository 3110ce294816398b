//! Errors raised while populating a grid.

use std::error::Error;
use std::fmt;

use cellsim_core::AgentId;
use cellsim_store::StoreError;

/// Failure of an [`Initializer`](crate::Initializer).
#[derive(Clone, Debug, PartialEq)]
pub enum InitError {
    /// A probability outside `[0, 1]` (or NaN) was supplied.
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// Fewer eligible cells exist than were requested.
    InsufficientCells {
        /// Cells requested.
        requested: usize,
        /// Eligible cells found.
        eligible: usize,
    },
    /// One agent would be placed at more than one coordinate.
    DuplicateAgent {
        /// The repeated agent.
        id: AgentId,
    },
    /// A write was rejected by storage.
    Store(StoreError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability { value } => {
                write!(f, "probability must be within [0, 1], got {value}")
            }
            Self::InsufficientCells {
                requested,
                eligible,
            } => write!(
                f,
                "requested {requested} cells but only {eligible} are eligible"
            ),
            Self::DuplicateAgent { id } => {
                write!(f, "agent {id} would occupy more than one cell")
            }
            Self::Store(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for InitError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

pub(crate) fn check_probability(value: f64) -> Result<f64, InitError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(InitError::InvalidProbability { value })
    }
}
