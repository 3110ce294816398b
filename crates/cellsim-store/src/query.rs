//! Read-only queries layered over any [`GridModel`].

use cellsim_core::{Coord, Direction};
use cellsim_space::{NeighbourList, NeighbourhoodMode};

use crate::model::GridModel;

/// Convenience queries available on every model, including trait objects.
pub trait GridModelExt: GridModel {
    /// Count cells whose entity satisfies `predicate`.
    ///
    /// Generic counterpart of [`GridModel::count_entities`].
    fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Self::Entity) -> bool,
    {
        self.count_entities(&mut predicate)
    }

    /// Whether `coord` is on the grid and holds a non-default entity.
    fn contains_non_default(&self, coord: Coord) -> bool {
        self.try_get(coord)
            .map(|e| e != self.default_entity())
            .unwrap_or(false)
    }
}

impl<M: GridModel + ?Sized> GridModelExt for M {}

/// Count usable neighbours of `origin` whose entity satisfies `predicate`.
///
/// Blocked neighbours are skipped. An absorbed neighbour that resolves
/// onto a cell already visited is counted again, once per direction.
///
/// # Panics
///
/// Panics if `origin` is off the grid.
pub fn count_neighbours<M, F>(model: &M, origin: Coord, mode: NeighbourhoodMode, mut predicate: F) -> usize
where
    M: GridModel + ?Sized,
    F: FnMut(&M::Entity) -> bool,
{
    model
        .structure()
        .usable_neighbours(origin, mode)
        .into_iter()
        .filter(|&(_, c)| predicate(model.get(c)))
        .count()
}

/// Usable neighbours of `origin` with the entity each holds.
///
/// # Panics
///
/// Panics if `origin` is off the grid.
pub fn neighbour_cells<M>(
    model: &M,
    origin: Coord,
    mode: NeighbourhoodMode,
) -> NeighbourList<(Direction, Coord, &M::Entity)>
where
    M: GridModel + ?Sized,
{
    model
        .structure()
        .usable_neighbours(origin, mode)
        .into_iter()
        .map(|(d, c)| (d, c, model.get(c)))
        .collect()
}
