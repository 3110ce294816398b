//! Per-axis edge behaviour and the [`Resolution`] of raw coordinates.

use cellsim_core::Coord;
use std::fmt;

/// How one axis of the grid treats coordinates that fall off its ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Off-grid neighbour does not exist.
    Block,
    /// Off-grid coordinate maps to the opposite side (periodic).
    Wrap,
    /// Off-grid coordinate is clamped to the nearest edge cell.
    Absorb,
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => f.write_str("block"),
            Self::Wrap => f.write_str("wrap"),
            Self::Absorb => f.write_str("absorb"),
        }
    }
}

/// Independent [`EdgeBehavior`] for the X (column) and Y (row) axes.
///
/// The named constants are the usual configuration surface; mixed
/// combinations such as [`WRAP_X_BLOCK_Y`](Self::WRAP_X_BLOCK_Y) model a
/// cylinder.
///
/// # Examples
///
/// ```
/// use cellsim_space::{EdgeBehavior, GridEdgeBehavior};
///
/// let cylinder = GridEdgeBehavior::WRAP_X_BLOCK_Y;
/// assert_eq!(cylinder.x, EdgeBehavior::Wrap);
/// assert_eq!(cylinder.y, EdgeBehavior::Block);
/// assert!(GridEdgeBehavior::WRAP_XY.is_toroidal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridEdgeBehavior {
    /// Behaviour along the X axis (west/east edges).
    pub x: EdgeBehavior,
    /// Behaviour along the Y axis (north/south edges).
    pub y: EdgeBehavior,
}

impl GridEdgeBehavior {
    /// Block on both axes: a bounded rectangle.
    pub const BLOCK_XY: Self = Self::new(EdgeBehavior::Block, EdgeBehavior::Block);
    /// Wrap on both axes: a torus.
    pub const WRAP_XY: Self = Self::new(EdgeBehavior::Wrap, EdgeBehavior::Wrap);
    /// Absorb on both axes.
    pub const ABSORB_XY: Self = Self::new(EdgeBehavior::Absorb, EdgeBehavior::Absorb);
    /// Block west/east, wrap north/south.
    pub const BLOCK_X_WRAP_Y: Self = Self::new(EdgeBehavior::Block, EdgeBehavior::Wrap);
    /// Wrap west/east, block north/south.
    pub const WRAP_X_BLOCK_Y: Self = Self::new(EdgeBehavior::Wrap, EdgeBehavior::Block);
    /// Block west/east, absorb north/south.
    pub const BLOCK_X_ABSORB_Y: Self = Self::new(EdgeBehavior::Block, EdgeBehavior::Absorb);
    /// Absorb west/east, block north/south.
    pub const ABSORB_X_BLOCK_Y: Self = Self::new(EdgeBehavior::Absorb, EdgeBehavior::Block);
    /// Wrap west/east, absorb north/south.
    pub const WRAP_X_ABSORB_Y: Self = Self::new(EdgeBehavior::Wrap, EdgeBehavior::Absorb);
    /// Absorb west/east, wrap north/south.
    pub const ABSORB_X_WRAP_Y: Self = Self::new(EdgeBehavior::Absorb, EdgeBehavior::Wrap);

    /// Combine two per-axis behaviours.
    pub const fn new(x: EdgeBehavior, y: EdgeBehavior) -> Self {
        Self { x, y }
    }

    /// Same behaviour on both axes.
    pub const fn uniform(edge: EdgeBehavior) -> Self {
        Self { x: edge, y: edge }
    }

    /// Whether both axes wrap.
    pub fn is_toroidal(&self) -> bool {
        self.x == EdgeBehavior::Wrap && self.y == EdgeBehavior::Wrap
    }
}

impl Default for GridEdgeBehavior {
    fn default() -> Self {
        Self::WRAP_XY
    }
}

impl fmt::Display for GridEdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x == self.y {
            write!(f, "{}_xy", self.x)
        } else {
            write!(f, "{}_x_{}_y", self.x, self.y)
        }
    }
}

/// Outcome of resolving a raw coordinate against a grid.
///
/// `Blocked` is not an error: it is the first-class answer "this
/// neighbour does not exist", and neighbour-consuming code branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resolution {
    /// In bounds; coordinate unchanged.
    Valid(Coord),
    /// Off-grid on at least one wrapping axis; wrapped coordinate.
    Wrapped(Coord),
    /// Off-grid on at least one absorbing axis; clamped coordinate.
    Absorbed(Coord),
    /// Off-grid on a blocking axis; no substitute.
    Blocked,
}

impl Resolution {
    /// The usable coordinate, treating wrapped and absorbed results as
    /// usable. `None` only for [`Resolution::Blocked`].
    pub fn coord(&self) -> Option<Coord> {
        match *self {
            Self::Valid(c) | Self::Wrapped(c) | Self::Absorbed(c) => Some(c),
            Self::Blocked => None,
        }
    }

    /// The coordinate only if it was in bounds to begin with.
    pub fn valid_coord(&self) -> Option<Coord> {
        match *self {
            Self::Valid(c) => Some(c),
            _ => None,
        }
    }

    /// Whether a coordinate is available.
    pub fn is_usable(&self) -> bool {
        !self.is_blocked()
    }

    /// Whether the neighbour does not exist.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// Per-axis result before combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AxisOutcome {
    InRange(i32),
    Wrapped(i32),
    Absorbed(i32),
    Blocked,
}

/// Resolve a single axis value under the given edge behaviour.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> AxisOutcome {
    let n = len as i32;
    if val >= 0 && val < n {
        return AxisOutcome::InRange(val);
    }
    match edge {
        EdgeBehavior::Block => AxisOutcome::Blocked,
        EdgeBehavior::Wrap => AxisOutcome::Wrapped(val.rem_euclid(n)),
        EdgeBehavior::Absorb => AxisOutcome::Absorbed(val.clamp(0, n - 1)),
    }
}

/// Combine the two per-axis outcomes into one [`Resolution`].
///
/// Any blocked axis blocks the whole coordinate. Otherwise an absorbed
/// axis outranks a wrapped one: a clamped coordinate is no longer a
/// geometric neighbour, which is the more important fact for callers.
pub(crate) fn combine(x: AxisOutcome, y: AxisOutcome) -> Resolution {
    let (xv, x_moved, x_absorbed) = match x {
        AxisOutcome::InRange(v) => (v, false, false),
        AxisOutcome::Wrapped(v) => (v, true, false),
        AxisOutcome::Absorbed(v) => (v, true, true),
        AxisOutcome::Blocked => return Resolution::Blocked,
    };
    let (yv, y_moved, y_absorbed) = match y {
        AxisOutcome::InRange(v) => (v, false, false),
        AxisOutcome::Wrapped(v) => (v, true, false),
        AxisOutcome::Absorbed(v) => (v, true, true),
        AxisOutcome::Blocked => return Resolution::Blocked,
    };
    let coord = Coord::new(xv, yv);
    if x_absorbed || y_absorbed {
        Resolution::Absorbed(coord)
    } else if x_moved || y_moved {
        Resolution::Wrapped(coord)
    } else {
        Resolution::Valid(coord)
    }
}
