//! Neighbourhood modes and edge-agnostic neighbour geometry.

use crate::edge::Resolution;
use crate::shape::CellShape;
use cellsim_core::{Coord, Direction};
use smallvec::SmallVec;

/// Which adjacent cells count as neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NeighbourhoodMode {
    /// Cells sharing an edge (4 for squares, 6 for hexagons).
    EdgesOnly,
    /// Cells sharing an edge or a vertex (8 for squares; hexagons have
    /// no vertex-only neighbours, so this equals `EdgesOnly` for them).
    #[default]
    EdgesAndVertices,
}

/// One neighbour of an origin cell after edge resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbour {
    /// Direction from the origin.
    pub direction: Direction,
    /// Geometric coordinate before edge handling (may be off-grid).
    pub raw: Coord,
    /// Edge-resolution outcome.
    pub resolution: Resolution,
}

impl Neighbour {
    /// The usable coordinate, if the neighbour was not blocked.
    pub fn coord(&self) -> Option<Coord> {
        self.resolution.coord()
    }
}

/// Inline storage for up to eight neighbours (covers every shape).
pub type NeighbourList<T> = SmallVec<[T; 8]>;

/// Enumerate geometric neighbours of `origin`, ignoring grid bounds.
///
/// Pure geometry: returned coordinates may be negative or beyond the
/// grid. The order is stable (see [`CellShape::directions`]) so that
/// random tie-breaks downstream are reproducible.
///
/// # Examples
///
/// ```
/// use cellsim_core::{Coord, Direction};
/// use cellsim_space::{neighbours_ignoring_edges, CellShape, NeighbourhoodMode};
///
/// let n = neighbours_ignoring_edges(
///     Coord::new(0, 0),
///     NeighbourhoodMode::EdgesOnly,
///     CellShape::Square,
/// );
/// assert_eq!(n[0], (Direction::North, Coord::new(0, -1)));
/// assert_eq!(n.len(), 4);
/// ```
pub fn neighbours_ignoring_edges(
    origin: Coord,
    mode: NeighbourhoodMode,
    shape: CellShape,
) -> NeighbourList<(Direction, Coord)> {
    shape
        .directions(mode)
        .iter()
        .filter_map(|&direction| {
            shape
                .delta(direction, origin.y)
                .map(|(dx, dy)| (direction, origin.offset(dx, dy)))
        })
        .collect()
}
