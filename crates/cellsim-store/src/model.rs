//! The [`GridModel`] storage abstraction.

use cellsim_core::{Coord, GridEntity};
use cellsim_space::GridStructure;

use crate::error::StoreError;

/// A coordinate paired with the entity occupying it.
///
/// Produced by storage iteration; never stored.
#[derive(Debug, PartialEq)]
pub struct GridCell<'a, E> {
    /// Where the entity sits.
    pub coord: Coord,
    /// The occupying entity.
    pub entity: &'a E,
}

impl<E> Clone for GridCell<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for GridCell<'_, E> {}

/// Storage of one entity per coordinate of a [`GridStructure`].
///
/// Every coordinate always holds an entity; cells never written hold
/// [`default_entity`](GridModel::default_entity). Implementations differ
/// only in cost, never in observable results.
///
/// # Object safety
///
/// This trait is object-safe; step logic receives
/// `&dyn GridModel<Entity = E>` so it never depends on the backend.
///
/// # Single residency
///
/// `set` does not check whether an agent already resides elsewhere.
/// Relocate agents with [`move_entity`](GridModel::move_entity), which
/// vacates the source in the same operation that occupies the target.
pub trait GridModel {
    /// The entity type stored in each cell.
    type Entity: GridEntity;

    /// The structure this storage is bound to.
    fn structure(&self) -> &GridStructure;

    /// The entity meaning "empty" for this model.
    fn default_entity(&self) -> &Self::Entity;

    /// Entity at `coord`.
    ///
    /// Returns `Err(StoreError::Space)` if `coord` is off the grid.
    fn try_get(&self, coord: Coord) -> Result<&Self::Entity, StoreError>;

    /// Replace the entity at `coord`, returning the previous occupant.
    ///
    /// Returns `Err(StoreError::Space)` if `coord` is off the grid.
    fn try_set(&mut self, coord: Coord, entity: Self::Entity) -> Result<Self::Entity, StoreError>;

    /// Cells whose entity differs from the default, in row-major order.
    ///
    /// Lazy and finite; call again for a fresh pass. Never materializes
    /// the whole grid.
    fn non_default_cells(&self) -> Box<dyn Iterator<Item = GridCell<'_, Self::Entity>> + '_>;

    /// Number of cells whose entity differs from the default.
    fn non_default_count(&self) -> usize;

    /// Reset every cell to the default entity.
    fn clear(&mut self);

    /// Entity at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn get(&self, coord: Coord) -> &Self::Entity {
        self.try_get(coord).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Replace the entity at `coord`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn set(&mut self, coord: Coord, entity: Self::Entity) -> Self::Entity {
        self.try_set(coord, entity).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Remove and return the entity at `coord`, leaving the default.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn take(&mut self, coord: Coord) -> Self::Entity {
        let empty = self.default_entity().clone();
        self.set(coord, empty)
    }

    /// Move the entity at `from` to `to` as one operation.
    ///
    /// `from` is left holding the default entity. Returns whatever
    /// occupied `to` before the move (the default entity if it was
    /// empty). Moving a cell onto itself changes nothing and returns the
    /// default entity.
    ///
    /// Both coordinates are checked before anything is written.
    fn move_entity(&mut self, from: Coord, to: Coord) -> Result<Self::Entity, StoreError> {
        self.structure().check(from)?;
        self.structure().check(to)?;
        if from == to {
            return Ok(self.default_entity().clone());
        }
        let empty = self.default_entity().clone();
        let moving = self.try_set(from, empty)?;
        self.try_set(to, moving)
    }

    /// Coordinates of non-default cells, in row-major order.
    fn non_default_coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(self.non_default_cells().map(|cell| cell.coord))
    }

    /// Whether `coord` holds the default entity.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn is_default(&self, coord: Coord) -> bool {
        self.get(coord) == self.default_entity()
    }

    /// Count cells, over the whole grid, whose entity satisfies `predicate`.
    ///
    /// Visits the non-default cells once and accounts for the default
    /// cells with a single predicate call, so sparse storage pays only
    /// for its occupied cells.
    fn count_entities(&self, predicate: &mut dyn FnMut(&Self::Entity) -> bool) -> usize {
        let mut count = 0;
        for cell in self.non_default_cells() {
            if predicate(cell.entity) {
                count += 1;
            }
        }
        if predicate(self.default_entity()) {
            count += self.structure().cell_count() - self.non_default_count();
        }
        count
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.structure().cell_count()
    }
}
