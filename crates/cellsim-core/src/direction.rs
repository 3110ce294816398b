//! Compass directions attached to neighbours and agent headings.

use std::fmt;

/// One of the eight compass directions.
///
/// North is towards row 0 (decreasing `y`), east towards increasing `x`.
/// Square grids use all eight; hexagonal grids use the six that are not
/// due north or due south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `y - 1`.
    North = 0,
    /// `x + 1, y - 1` on square grids.
    NorthEast = 1,
    /// `x + 1`.
    East = 2,
    /// `x + 1, y + 1` on square grids.
    SouthEast = 3,
    /// `y + 1`.
    South = 4,
    /// `x - 1, y + 1` on square grids.
    SouthWest = 5,
    /// `x - 1`.
    West = 6,
    /// `x - 1, y - 1` on square grids.
    NorthWest = 7,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four edge-adjacent square directions, clockwise from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(dx, dy)` displacement on a square grid.
    pub fn square_delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        Self::from_index(self as u8 + 4)
    }

    /// Rotate 45 degrees clockwise.
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// Rotate 45 degrees counter-clockwise.
    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self as u8 + 7)
    }

    /// Whether this is one of N, E, S, W.
    pub fn is_cardinal(self) -> bool {
        (self as u8) % 2 == 0
    }

    fn from_index(i: u8) -> Self {
        Self::ALL[(i % 8) as usize]
    }

    /// Short compass label (`"N"`, `"NE"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    }

    #[test]
    fn rotation_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_cw().rotate_ccw(), d);
        }
        assert_eq!(Direction::NorthWest.rotate_cw(), Direction::North);
        assert_eq!(Direction::North.rotate_ccw(), Direction::NorthWest);
    }

    #[test]
    fn opposite_deltas_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.square_delta();
            let (ox, oy) = d.opposite().square_delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn cardinal_flags() {
        let cardinal: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_cardinal())
            .collect();
        assert_eq!(cardinal, Direction::CARDINAL.to_vec());
    }
}
