//! Grid topology for cellsim simulations.
//!
//! This crate defines [`GridStructure`], the immutable description of a
//! simulation board, together with everything needed to answer "who are
//! my neighbours?":
//!
//! - [`CellShape`]: square or hexagonal cells, each with its own neighbour
//!   geometry and tiling constraint
//! - [`EdgeBehavior`] / [`GridEdgeBehavior`]: per-axis block, wrap or
//!   absorb handling of off-grid coordinates
//! - [`NeighbourhoodMode`]: edge-adjacent only, or edges and vertices
//! - [`Resolution`]: the outcome of pushing a raw coordinate through edge
//!   behaviour
//!
//! Neighbour lookup is a two-stage pipeline: pure geometry
//! ([`neighbours_ignoring_edges`]) followed by edge resolution
//! ([`GridStructure::apply_edge_behavior`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod neighbourhood;
pub mod shape;
pub mod structure;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::{EdgeBehavior, GridEdgeBehavior, Resolution};
pub use error::SpaceError;
pub use neighbourhood::{neighbours_ignoring_edges, Neighbour, NeighbourList, NeighbourhoodMode};
pub use shape::CellShape;
pub use structure::{Coords, GridStructure};
