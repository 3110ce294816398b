//! Storage-specific error types.

use std::error::Error;
use std::fmt;

use cellsim_core::RuleError;
use cellsim_space::{GridStructure, SpaceError};

/// Errors that can occur during storage operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A coordinate was rejected by the bound grid structure.
    Space(SpaceError),
    /// Two storages that must share a grid structure do not.
    StructureMismatch {
        /// Structure of the first storage.
        expected: GridStructure,
        /// Structure of the second storage.
        found: GridStructure,
    },
    /// Two storages that must share a default entity do not.
    DefaultMismatch {
        /// Debug rendering of the first storage's default.
        expected: String,
        /// Debug rendering of the second storage's default.
        found: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "{e}"),
            Self::StructureMismatch { expected, found } => {
                write!(
                    f,
                    "grid structure mismatch: expected {}x{} {}, found {}x{} {}",
                    expected.width(),
                    expected.height(),
                    expected.shape(),
                    found.width(),
                    found.height(),
                    found.shape()
                )
            }
            Self::DefaultMismatch { expected, found } => {
                write!(f, "default entity mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::StructureMismatch { .. } | Self::DefaultMismatch { .. } => None,
        }
    }
}

impl From<SpaceError> for StoreError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

/// Lets step logic propagate storage failures with `?`.
impl From<StoreError> for RuleError {
    fn from(e: StoreError) -> Self {
        RuleError::failed(e.to_string())
    }
}
