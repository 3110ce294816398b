//! Error types for grid construction and coordinate queries.

use crate::shape::CellShape;
use cellsim_core::Coord;
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
    /// A dimension is not a multiple the cell shape needs to tile.
    TilingMismatch {
        /// The cell shape imposing the constraint.
        shape: CellShape,
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The required multiple.
        multiple: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::TilingMismatch {
                shape,
                name,
                value,
                multiple,
            } => {
                write!(
                    f,
                    "{shape} cells need {name} to be a multiple of {multiple}, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
