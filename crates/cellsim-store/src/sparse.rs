//! Sparse storage: only cells that differ from the default are kept.

use std::collections::BTreeMap;

use cellsim_core::{Coord, GridEntity};
use cellsim_space::GridStructure;

use crate::error::StoreError;
use crate::model::{GridCell, GridModel};

/// Map from row-major rank to entity, holding non-default cells only.
///
/// Appropriate when occupancy is low (a few agents on a large board).
/// Absent ranks read as the default entity, and writing the default
/// removes the entry, so memory tracks occupancy exactly.
///
/// Keys are ranks in an ordered map: iteration is row-major by
/// construction, not insertion order. Access is O(log occupied); a
/// non-default pass is O(occupied).
#[derive(Clone, Debug)]
pub struct SparseGrid<E> {
    structure: GridStructure,
    default: E,
    cells: BTreeMap<usize, E>,
}

impl<E: GridEntity> SparseGrid<E> {
    /// Create an empty grid reading `default` everywhere.
    pub fn new(structure: GridStructure, default: E) -> Self {
        Self {
            structure,
            default,
            cells: BTreeMap::new(),
        }
    }

    fn rank(&self, coord: Coord) -> Result<usize, StoreError> {
        self.structure.check(coord)?;
        // check() guarantees rank() is Some.
        Ok(self.structure.rank(coord).unwrap_or_default())
    }
}

impl<E: GridEntity> GridModel for SparseGrid<E> {
    type Entity = E;

    fn structure(&self) -> &GridStructure {
        &self.structure
    }

    fn default_entity(&self) -> &E {
        &self.default
    }

    fn try_get(&self, coord: Coord) -> Result<&E, StoreError> {
        let rank = self.rank(coord)?;
        Ok(self.cells.get(&rank).unwrap_or(&self.default))
    }

    fn try_set(&mut self, coord: Coord, entity: E) -> Result<E, StoreError> {
        let rank = self.rank(coord)?;
        let old = if entity == self.default {
            self.cells.remove(&rank)
        } else {
            self.cells.insert(rank, entity)
        };
        Ok(old.unwrap_or_else(|| self.default.clone()))
    }

    fn non_default_cells(&self) -> Box<dyn Iterator<Item = GridCell<'_, E>> + '_> {
        let structure = &self.structure;
        Box::new(self.cells.iter().filter_map(move |(&rank, entity)| {
            structure
                .coord_at(rank)
                .map(|coord| GridCell { coord, entity })
        }))
    }

    fn non_default_count(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use cellsim_space::{CellShape, GridEdgeBehavior};

    fn structure(w: u32, h: u32) -> GridStructure {
        GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, w, h).unwrap()
    }

    #[test]
    fn writing_default_removes_entry() {
        let mut g = SparseGrid::new(structure(10, 10), 0u8);
        g.set(Coord::new(3, 3), 7);
        assert_eq!(g.non_default_count(), 1);
        let old = g.set(Coord::new(3, 3), 0);
        assert_eq!(old, 7);
        assert_eq!(g.non_default_count(), 0);
        assert_eq!(*g.get(Coord::new(3, 3)), 0);
    }

    #[test]
    fn iteration_is_row_major_not_insertion_order() {
        let mut g = SparseGrid::new(structure(10, 10), 0u8);
        g.set(Coord::new(9, 9), 1);
        g.set(Coord::new(0, 5), 2);
        g.set(Coord::new(4, 0), 3);
        let coords: Vec<_> = g.non_default_coords().collect();
        assert_eq!(
            coords,
            vec![Coord::new(4, 0), Coord::new(0, 5), Coord::new(9, 9)]
        );
    }

    #[test]
    fn set_on_empty_returns_default() {
        let mut g = SparseGrid::new(structure(2, 2), 0u8);
        assert_eq!(g.set(Coord::new(1, 1), 4), 0);
    }

    #[test]
    fn count_includes_default_cells_without_scanning_them() {
        let mut g = SparseGrid::new(structure(100, 100), 0u8);
        g.set(Coord::new(1, 1), 3);
        g.set(Coord::new(2, 2), 3);
        let mut calls = 0;
        let zeros = g.count_entities(&mut |e| {
            calls += 1;
            *e == 0
        });
        assert_eq!(zeros, 9_998);
        assert_eq!(calls, 3);
    }

    #[test]
    fn compliance_sparse() {
        let mut g = SparseGrid::new(structure(7, 5), 0u8);
        compliance::run_full_compliance(&mut g);
    }
}
