//! Fixed shapes stamped around an anchor.

use std::collections::HashSet;

use cellsim_core::{Coord, GridEntity};
use cellsim_store::GridModel;
use tracing::trace;

use crate::error::InitError;
use crate::initializer::Initializer;
use crate::rng::SimRng;

/// Writes fixed entities at offsets from an anchor.
///
/// Each `anchor + offset` is resolved through the grid's edge behaviour,
/// the same path neighbour resolution uses: wrapped and absorbed
/// coordinates are written, blocked ones are skipped. The generator is
/// not consumed.
///
/// Patterns are meant for constant entities. An agent may appear at one
/// offset; a pattern repeating an agent ID fails with
/// [`InitError::DuplicateAgent`] before anything is written. Running the
/// same agent-bearing pattern twice places the agent twice, which this
/// type cannot detect.
///
/// # Examples
///
/// ```
/// use cellsim_core::Coord;
/// use cellsim_init::{seeded, Initializer, Pattern};
/// use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
/// use cellsim_store::{DenseGrid, GridModel};
///
/// // A blinker straddling the west edge of a torus.
/// let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 5, 5).unwrap();
/// let mut grid = DenseGrid::new(s, false);
/// let mut blinker = Pattern::new(Coord::new(0, 2)).with_all([(-1, 0), (0, 0), (1, 0)], true);
/// assert_eq!(blinker.populate(&mut grid, &mut seeded(0)).unwrap(), 3);
/// assert!(*grid.get(Coord::new(4, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct Pattern<E> {
    anchor: Coord,
    cells: Vec<((i32, i32), E)>,
}

impl<E: GridEntity> Pattern<E> {
    /// An empty pattern anchored at `anchor`.
    ///
    /// The anchor itself may lie off the grid.
    pub fn new(anchor: Coord) -> Self {
        Self {
            anchor,
            cells: Vec::new(),
        }
    }

    /// Add `entity` at offset `(dx, dy)` from the anchor.
    pub fn with(mut self, dx: i32, dy: i32, entity: E) -> Self {
        self.cells.push(((dx, dy), entity));
        self
    }

    /// Add `entity` at every offset in `offsets`.
    ///
    /// With an agent entity and more than one offset, the pattern fails
    /// on [`populate`](Initializer::populate).
    pub fn with_all(mut self, offsets: impl IntoIterator<Item = (i32, i32)>, entity: E) -> Self {
        for offset in offsets {
            self.cells.push((offset, entity.clone()));
        }
        self
    }

    /// Move the anchor, keeping the offsets.
    pub fn anchored_at(mut self, anchor: Coord) -> Self {
        self.anchor = anchor;
        self
    }

    /// Number of offsets in the pattern.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has no offsets.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<E: GridEntity> Initializer<E> for Pattern<E> {
    fn name(&self) -> &str {
        "pattern"
    }

    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        _rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        let mut seen = HashSet::new();
        for id in self.cells.iter().filter_map(|(_, e)| e.agent_id()) {
            if !seen.insert(id) {
                return Err(InitError::DuplicateAgent { id });
            }
        }
        let structure = *model.structure();
        let mut written = 0;
        for ((dx, dy), entity) in &self.cells {
            let raw = self.anchor.offset(*dx, *dy);
            match structure.apply_edge_behavior(raw).coord() {
                Some(coord) => {
                    model.try_set(coord, entity.clone())?;
                    written += 1;
                }
                None => trace!(%raw, "pattern cell blocked"),
            }
        }
        Ok(written)
    }
}
