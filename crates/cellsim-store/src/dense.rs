//! Dense storage: one slot per cell.

use cellsim_core::{Coord, GridEntity};
use cellsim_space::GridStructure;

use crate::error::StoreError;
use crate::model::{GridCell, GridModel};

/// Fixed-size, row-major array of entities.
///
/// Appropriate when most cells are expected to be non-default (a Game of
/// Life background, a forest). `get`/`set` are O(1).
///
/// Non-default iteration has no occupancy index to consult and scans
/// all cells: O(cell count) per pass regardless of occupancy. Only the
/// occupied-cell *count* is maintained incrementally, so
/// [`non_default_count`](GridModel::non_default_count) stays O(1).
#[derive(Clone, Debug)]
pub struct DenseGrid<E> {
    structure: GridStructure,
    default: E,
    cells: Vec<E>,
    occupied: usize,
}

impl<E: GridEntity> DenseGrid<E> {
    /// Allocate a grid with every cell holding `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellsim_core::Coord;
    /// use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
    /// use cellsim_store::{DenseGrid, GridModel};
    ///
    /// let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 8, 8).unwrap();
    /// let mut grid = DenseGrid::new(s, false);
    /// grid.set(Coord::new(2, 3), true);
    /// assert!(*grid.get(Coord::new(2, 3)));
    /// assert_eq!(grid.non_default_count(), 1);
    /// ```
    pub fn new(structure: GridStructure, default: E) -> Self {
        Self {
            cells: vec![default.clone(); structure.cell_count()],
            structure,
            default,
            occupied: 0,
        }
    }

    fn index(&self, coord: Coord) -> Result<usize, StoreError> {
        self.structure.check(coord)?;
        // check() guarantees rank() is Some.
        Ok(self.structure.rank(coord).unwrap_or_default())
    }
}

impl<E: GridEntity> GridModel for DenseGrid<E> {
    type Entity = E;

    fn structure(&self) -> &GridStructure {
        &self.structure
    }

    fn default_entity(&self) -> &E {
        &self.default
    }

    fn try_get(&self, coord: Coord) -> Result<&E, StoreError> {
        let i = self.index(coord)?;
        Ok(&self.cells[i])
    }

    fn try_set(&mut self, coord: Coord, entity: E) -> Result<E, StoreError> {
        let i = self.index(coord)?;
        let was_default = self.cells[i] == self.default;
        let is_default = entity == self.default;
        let old = std::mem::replace(&mut self.cells[i], entity);
        match (was_default, is_default) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }
        Ok(old)
    }

    fn non_default_cells(&self) -> Box<dyn Iterator<Item = GridCell<'_, E>> + '_> {
        let default = &self.default;
        let structure = &self.structure;
        Box::new(
            self.cells
                .iter()
                .enumerate()
                .filter(move |(_, e)| *e != default)
                .filter_map(move |(rank, entity)| {
                    structure
                        .coord_at(rank)
                        .map(|coord| GridCell { coord, entity })
                }),
        )
    }

    fn non_default_count(&self) -> usize {
        self.occupied
    }

    fn clear(&mut self) {
        if self.occupied == 0 {
            return;
        }
        for cell in &mut self.cells {
            *cell = self.default.clone();
        }
        self.occupied = 0;
    }
}
