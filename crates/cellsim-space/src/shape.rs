//! Cell shapes and their geometric constraints.

use crate::neighbourhood::NeighbourhoodMode;
use cellsim_core::Direction;
use std::fmt;

/// Square, edge-only neighbour order (clockwise from north).
const SQUARE_EDGES: [Direction; 4] = Direction::CARDINAL;

/// Square, edges and vertices (clockwise from north).
const SQUARE_ALL: [Direction; 8] = Direction::ALL;

/// Hexagon neighbour order (clockwise from north-east).
const HEX_ALL: [Direction; 6] = [
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// Geometry of a single cell.
///
/// Hexagons use pointy-top "odd-r" offset layout: odd rows are shifted
/// half a cell to the east. Row parity therefore decides the diagonal
/// offsets, which is why hexagonal grids need an even height: wrapping
/// north/south over an odd number of rows would join two rows of the
/// same parity and leave a seam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellShape {
    /// Four edge neighbours, four more at the vertices.
    #[default]
    Square,
    /// Six edge neighbours, no extra vertex neighbours.
    Hexagon,
}

impl CellShape {
    /// Required `(width, height)` multiples for the shape to tile.
    pub fn tiling_multiple(self) -> (u32, u32) {
        match self {
            CellShape::Square => (1, 1),
            CellShape::Hexagon => (1, 2),
        }
    }

    /// Neighbour directions in their stable iteration order.
    ///
    /// For hexagons the mode has no effect.
    pub fn directions(self, mode: NeighbourhoodMode) -> &'static [Direction] {
        match (self, mode) {
            (CellShape::Square, NeighbourhoodMode::EdgesOnly) => &SQUARE_EDGES,
            (CellShape::Square, NeighbourhoodMode::EdgesAndVertices) => &SQUARE_ALL,
            (CellShape::Hexagon, _) => &HEX_ALL,
        }
    }

    /// Neighbour count of an interior cell.
    pub fn neighbour_count(self, mode: NeighbourhoodMode) -> usize {
        self.directions(mode).len()
    }

    /// Whether `direction` names a geometric neighbour of this shape.
    pub fn has_direction(self, direction: Direction) -> bool {
        self.directions(NeighbourhoodMode::EdgesAndVertices)
            .contains(&direction)
    }

    /// Displacement in `direction` from a cell in row `y`.
    ///
    /// Returns `None` when the shape has no neighbour that way (due north
    /// or south of a hexagon).
    pub fn delta(self, direction: Direction, y: i32) -> Option<(i32, i32)> {
        match self {
            CellShape::Square => Some(direction.square_delta()),
            CellShape::Hexagon => {
                let odd = y.rem_euclid(2) == 1;
                // Odd rows sit half a cell east of even rows.
                let (west_dx, east_dx) = if odd { (0, 1) } else { (-1, 0) };
                match direction {
                    Direction::East => Some((1, 0)),
                    Direction::West => Some((-1, 0)),
                    Direction::NorthEast => Some((east_dx, -1)),
                    Direction::NorthWest => Some((west_dx, -1)),
                    Direction::SouthEast => Some((east_dx, 1)),
                    Direction::SouthWest => Some((west_dx, 1)),
                    Direction::North | Direction::South => None,
                }
            }
        }
    }
}

impl fmt::Display for CellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellShape::Square => f.write_str("square"),
            CellShape::Hexagon => f.write_str("hexagon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_mode() {
        assert_eq!(CellShape::Square.neighbour_count(NeighbourhoodMode::EdgesOnly), 4);
        assert_eq!(
            CellShape::Square.neighbour_count(NeighbourhoodMode::EdgesAndVertices),
            8
        );
        assert_eq!(CellShape::Hexagon.neighbour_count(NeighbourhoodMode::EdgesOnly), 6);
        assert_eq!(
            CellShape::Hexagon.neighbour_count(NeighbourhoodMode::EdgesAndVertices),
            6
        );
    }

    #[test]
    fn hex_has_no_due_north() {
        assert!(!CellShape::Hexagon.has_direction(Direction::North));
        assert!(!CellShape::Hexagon.has_direction(Direction::South));
        assert_eq!(CellShape::Hexagon.delta(Direction::North, 0), None);
        assert!(CellShape::Square.has_direction(Direction::North));
    }

    #[test]
    fn hex_diagonals_depend_on_row_parity() {
        let hex = CellShape::Hexagon;
        assert_eq!(hex.delta(Direction::NorthEast, 2), Some((0, -1)));
        assert_eq!(hex.delta(Direction::NorthEast, 3), Some((1, -1)));
        assert_eq!(hex.delta(Direction::SouthWest, 2), Some((-1, 1)));
        assert_eq!(hex.delta(Direction::SouthWest, 3), Some((0, 1)));
    }

    #[test]
    fn hex_opposites_cancel_across_rows() {
        // Moving one way and back must return to the start regardless of parity.
        for y in 0..4 {
            for d in CellShape::Hexagon.directions(NeighbourhoodMode::EdgesOnly) {
                let (dx, dy) = CellShape::Hexagon.delta(*d, y).unwrap();
                let (bx, by) = CellShape::Hexagon.delta(d.opposite(), y + dy).unwrap();
                assert_eq!((dx + bx, dy + by), (0, 0), "direction {d} from row {y}");
            }
        }
    }

    #[test]
    fn tiling_multiples() {
        assert_eq!(CellShape::Square.tiling_multiple(), (1, 1));
        assert_eq!(CellShape::Hexagon.tiling_multiple(), (1, 2));
    }
}
