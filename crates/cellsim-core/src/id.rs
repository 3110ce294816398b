//! Strongly-typed identifiers and the [`Coord`] value type.

use crate::direction::Direction;
use std::cmp::Ordering;
use std::fmt;

/// Identity of a grid cell: an `(x, y)` pair.
///
/// Coordinates produced by a grid structure are always non-negative and
/// in bounds. Coordinates produced by [`offset`](Coord::offset) or
/// [`step`](Coord::step) are *raw*: they may lie outside the grid (or be
/// negative) until passed through edge resolution.
///
/// Ordering is row-major: `y` first, then `x`. Sorting a set of
/// coordinates therefore yields the same order as a grid scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, growing eastwards.
    pub x: i32,
    /// Row, growing southwards.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Raw coordinate displaced by `(dx, dy)`. No bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Raw coordinate one square-grid step in `direction`.
    ///
    /// Hexagonal neighbours depend on row parity and are computed by the
    /// topology crate instead.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.square_delta();
        self.offset(dx, dy)
    }

    /// Raw coordinate one column to the west.
    pub const fn left(self) -> Self {
        self.offset(-1, 0)
    }

    /// Raw coordinate one column to the east.
    pub const fn right(self) -> Self {
        self.offset(1, 0)
    }

    /// Raw coordinate one row to the north.
    pub const fn up(self) -> Self {
        self.offset(0, -1)
    }

    /// Raw coordinate one row to the south.
    pub const fn down(self) -> Self {
        self.offset(0, 1)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Identifies a mutable agent by its spawn sequence number.
///
/// Lower IDs were spawned earlier. The default asynchronous step order
/// is ascending `AgentId`, which is independent of grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Per-run allocator of [`AgentId`] values.
///
/// Deliberately not a process-wide counter: two runs seeded alike must
/// hand out identical IDs, so each run owns its own allocator.
#[derive(Clone, Debug, Default)]
pub struct AgentIdAllocator {
    next: u64,
}

impl AgentIdAllocator {
    /// Create an allocator whose first ID is `AgentId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first ID is `AgentId(next)`.
    ///
    /// Used to continue numbering after agents placed during
    /// initialization.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Allocate the next spawn sequence number.
    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// One past the highest ID handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

/// Monotonically increasing step counter.
///
/// `StepIndex(0)` is the state produced by initialization; the first
/// executed step computes `StepIndex(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepIndex(pub u64);

impl StepIndex {
    /// The following step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
