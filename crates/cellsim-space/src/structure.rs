//! [`GridStructure`]: the immutable shape, size and edge policy of a board.

use crate::edge::{self, GridEdgeBehavior, Resolution};
use crate::error::SpaceError;
use crate::neighbourhood::{neighbours_ignoring_edges, Neighbour, NeighbourList, NeighbourhoodMode};
use crate::shape::CellShape;
use cellsim_core::{Coord, Direction};
use std::iter::FusedIterator;

/// Immutable description of a simulation board.
///
/// Constructed once per run. Width and height are positive, fit in
/// `i32`, and satisfy the cell shape's tiling multiple.
///
/// # Examples
///
/// ```
/// use cellsim_core::Coord;
/// use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure, NeighbourhoodMode, Resolution};
///
/// let grid = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 4, 3).unwrap();
/// assert_eq!(grid.cell_count(), 12);
///
/// // Wrapping is toroidal.
/// let corner = Coord::new(0, 0);
/// assert_eq!(grid.apply_edge_behavior(corner.left()), Resolution::Wrapped(Coord::new(3, 0)));
/// assert!(grid
///     .resolve_neighbours(corner, NeighbourhoodMode::EdgesAndVertices)
///     .iter()
///     .all(|n| n.resolution.is_usable()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridStructure {
    shape: CellShape,
    edge: GridEdgeBehavior,
    width: u32,
    height: u32,
}

impl GridStructure {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(SpaceError::TilingMismatch)` if the shape cannot tile the
    /// requested size.
    pub fn new(
        shape: CellShape,
        edge: GridEdgeBehavior,
        width: u32,
        height: u32,
    ) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let (mw, mh) = shape.tiling_multiple();
        for (name, value, multiple) in [("width", width, mw), ("height", height, mh)] {
            if value % multiple != 0 {
                return Err(SpaceError::TilingMismatch {
                    shape,
                    name,
                    value,
                    multiple,
                });
            }
        }
        Ok(Self {
            shape,
            edge,
            width,
            height,
        })
    }

    /// Cell shape.
    pub fn shape(&self) -> CellShape {
        self.shape
    }

    /// Per-axis edge behaviour.
    pub fn edge_behavior(&self) -> GridEdgeBehavior {
        self.edge
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width as i32 && coord.y < self.height as i32
    }

    /// `Ok(())` if `coord` lies on the grid, otherwise
    /// `Err(SpaceError::CoordOutOfBounds)`.
    pub fn check(&self, coord: Coord) -> Result<(), SpaceError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Row-major index of `coord`, or `None` if it is off the grid.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some((coord.y as usize) * (self.width as usize) + coord.x as usize)
    }

    /// Coordinate at row-major index `rank`, or `None` past the end.
    pub fn coord_at(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Coord::new((rank % w) as i32, (rank / w) as i32))
    }

    /// All coordinates in row-major order.
    ///
    /// Lazy; each call starts a fresh pass.
    pub fn coords(&self) -> Coords {
        Coords {
            width: self.width,
            next: 0,
            end: self.cell_count(),
        }
    }

    /// Resolve a raw coordinate against this grid's edge behaviour.
    ///
    /// Each axis is resolved independently; a blocked axis blocks the
    /// whole coordinate.
    pub fn apply_edge_behavior(&self, raw: Coord) -> Resolution {
        let x = edge::resolve_axis(raw.x, self.width, self.edge.x);
        let y = edge::resolve_axis(raw.y, self.height, self.edge.y);
        edge::combine(x, y)
    }

    /// Geometric neighbours of `origin` for this grid's cell shape,
    /// ignoring bounds.
    pub fn neighbours_ignoring_edges(
        &self,
        origin: Coord,
        mode: NeighbourhoodMode,
    ) -> NeighbourList<(Direction, Coord)> {
        neighbours_ignoring_edges(origin, mode, self.shape)
    }

    /// Every neighbour of `origin` with its edge-resolution outcome,
    /// including blocked ones, in stable direction order.
    ///
    /// Returns `Err(SpaceError::CoordOutOfBounds)` if `origin` is off
    /// the grid.
    pub fn try_resolve_neighbours(
        &self,
        origin: Coord,
        mode: NeighbourhoodMode,
    ) -> Result<NeighbourList<Neighbour>, SpaceError> {
        self.check(origin)?;
        Ok(self
            .neighbours_ignoring_edges(origin, mode)
            .into_iter()
            .map(|(direction, raw)| Neighbour {
                direction,
                raw,
                resolution: self.apply_edge_behavior(raw),
            })
            .collect())
    }

    /// Infallible form of [`try_resolve_neighbours`](Self::try_resolve_neighbours).
    ///
    /// # Panics
    ///
    /// Panics if `origin` is off the grid.
    pub fn resolve_neighbours(&self, origin: Coord, mode: NeighbourhoodMode) -> NeighbourList<Neighbour> {
        self.try_resolve_neighbours(origin, mode)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Usable neighbour coordinates of `origin` (blocked ones dropped).
    ///
    /// Wrapped and absorbed neighbours are included; an absorbed
    /// neighbour may equal `origin` or repeat another entry.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is off the grid.
    pub fn usable_neighbours(&self, origin: Coord, mode: NeighbourhoodMode) -> NeighbourList<(Direction, Coord)> {
        self.resolve_neighbours(origin, mode)
            .into_iter()
            .filter_map(|n| n.coord().map(|c| (n.direction, c)))
            .collect()
    }

    /// Resolve the single neighbour of `origin` in `direction`.
    ///
    /// Returns `None` if the cell shape has no neighbour that way.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is off the grid.
    pub fn neighbour(&self, origin: Coord, direction: Direction) -> Option<Resolution> {
        if let Err(e) = self.check(origin) {
            panic!("{e}");
        }
        let (dx, dy) = self.shape.delta(direction, origin.y)?;
        Some(self.apply_edge_behavior(origin.offset(dx, dy)))
    }

    /// Largest number of usable neighbours any cell has.
    pub fn max_neighbour_count(&self, mode: NeighbourhoodMode) -> usize {
        self.coords()
            .map(|c| {
                self.resolve_neighbours(c, mode)
                    .iter()
                    .filter(|n| n.resolution.is_usable())
                    .count()
            })
            .max()
            .unwrap_or(0)
    }
}

/// Row-major iterator over a grid's coordinates.
#[derive(Clone, Debug)]
pub struct Coords {
    width: u32,
    next: usize,
    end: usize,
}

impl Iterator for Coords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.end {
            return None;
        }
        let w = self.width as usize;
        let c = Coord::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Coords {}

impl FusedIterator for Coords {}
