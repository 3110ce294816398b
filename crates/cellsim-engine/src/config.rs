//! Run configuration and validation.
//!
//! [`GridConfig`] carries the fields every domain configuration must
//! supply: cell shape, edge behaviour, extents, and seed.
//! [`validate()`](GridConfig::validate) checks them once at startup.

use std::error::Error;
use std::fmt;

use cellsim_core::GridEntity;
use cellsim_init::{seeded, SimRng};
use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure, SpaceError};
use cellsim_store::{DenseGrid, SparseGrid};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The shape, edges, and extents do not form a valid grid.
    Structure(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structure(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Structure(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Minimum configuration of a simulation run.
///
/// # Examples
///
/// ```
/// use cellsim_engine::GridConfig;
/// use cellsim_space::{CellShape, GridEdgeBehavior};
///
/// let config = GridConfig::default()
///     .with_shape(CellShape::Hexagon)
///     .with_edge(GridEdgeBehavior::WRAP_X_BLOCK_Y)
///     .with_size(40, 30)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(config.with_size(40, 31).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Cell shape. Default: square.
    pub shape: CellShape,
    /// Per-axis edge behaviour. Default: wrap on both axes.
    pub edge: GridEdgeBehavior,
    /// Columns. Default: 64.
    pub width: u32,
    /// Rows. Default: 64.
    pub height: u32,
    /// Seed for every random draw of the run. Default: 0.
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            shape: CellShape::Square,
            edge: GridEdgeBehavior::WRAP_XY,
            width: 64,
            height: 64,
            seed: 0,
        }
    }
}

impl GridConfig {
    /// Set the cell shape.
    pub fn with_shape(mut self, shape: CellShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the edge behaviour.
    pub fn with_edge(mut self, edge: GridEdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Set the extents.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.structure().map(|_| ())
    }

    /// Build the grid structure.
    pub fn structure(&self) -> Result<GridStructure, ConfigError> {
        Ok(GridStructure::new(
            self.shape,
            self.edge,
            self.width,
            self.height,
        )?)
    }

    /// The run's seeded generator. Each call starts the stream afresh.
    pub fn rng(&self) -> SimRng {
        seeded(self.seed)
    }

    /// Dense storage for this configuration, every cell `default`.
    pub fn dense<E: GridEntity>(&self, default: E) -> Result<DenseGrid<E>, ConfigError> {
        Ok(DenseGrid::new(self.structure()?, default))
    }

    /// Sparse storage for this configuration, every cell `default`.
    pub fn sparse<E: GridEntity>(&self, default: E) -> Result<SparseGrid<E>, ConfigError> {
        Ok(SparseGrid::new(self.structure()?, default))
    }
}
