//! The [`Initializer`] trait and sequencing of several initializers.

use cellsim_core::{Coord, GridEntity};
use cellsim_store::GridModel;
use tracing::debug;

use crate::error::InitError;
use crate::rng::SimRng;

/// Predicate selecting which cells a strategy may write to.
///
/// Receives the coordinate and its current entity. Strategies without an
/// explicit filter treat every cell holding the default entity as
/// eligible.
pub type CellFilter<E> = Box<dyn Fn(Coord, &E) -> bool>;

/// A population strategy.
///
/// Implementations must draw from `rng` in an order that depends only on
/// the structure and the model's contents, never on hash iteration or
/// other unordered sources.
pub trait Initializer<E: GridEntity> {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Write entities into `model`, returning the number of cells written.
    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError>;
}

/// Whether `coord` passes `filter`, or holds the default when unfiltered.
pub(crate) fn is_eligible<E: GridEntity>(
    filter: Option<&CellFilter<E>>,
    model: &dyn GridModel<Entity = E>,
    coord: Coord,
) -> bool {
    let entity = model.get(coord);
    match filter {
        Some(f) => f(coord, entity),
        None => entity == model.default_entity(),
    }
}

/// Eligible coordinates in row-major order.
pub(crate) fn eligible_coords<E: GridEntity>(
    filter: Option<&CellFilter<E>>,
    model: &dyn GridModel<Entity = E>,
) -> Vec<Coord> {
    model
        .structure()
        .coords()
        .filter(|&c| is_eligible(filter, model, c))
        .collect()
}

/// Several initializers applied in order with one shared generator.
///
/// # Examples
///
/// ```
/// use cellsim_core::Coord;
/// use cellsim_init::{seeded, Counted, InitSequence, Pattern};
/// use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
/// use cellsim_store::{GridModel, SparseGrid};
///
/// let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 10, 10).unwrap();
/// let mut grid = SparseGrid::new(s, 0u8);
/// let mut init = InitSequence::new()
///     .then(Pattern::new(Coord::new(0, 0)).with(0, 0, 9u8))
///     .then(Counted::new(5, |_, _| 1u8));
/// let written = init.run(&mut grid, &mut seeded(7)).unwrap();
/// assert_eq!(written, 6);
/// assert_eq!(grid.non_default_count(), 6);
/// ```
pub struct InitSequence<E> {
    steps: Vec<Box<dyn Initializer<E>>>,
}

impl<E: GridEntity> InitSequence<E> {
    /// An empty sequence.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an initializer.
    pub fn then<I: Initializer<E> + 'static>(mut self, init: I) -> Self {
        self.steps.push(Box::new(init));
        self
    }

    /// Number of initializers in the sequence.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every initializer in order, stopping at the first error.
    ///
    /// Returns the total number of cell writes. A cell written by two
    /// initializers counts twice.
    pub fn run(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        let mut total = 0;
        for step in &mut self.steps {
            let written = step.populate(model, rng)?;
            debug!(initializer = step.name(), written, "initializer applied");
            total += written;
        }
        Ok(total)
    }
}

impl<E: GridEntity> Default for InitSequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GridEntity> Initializer<E> for InitSequence<E> {
    fn name(&self) -> &str {
        "sequence"
    }

    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        self.run(model, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
    use cellsim_store::DenseGrid;

    struct FillRow(i32);

    impl Initializer<u8> for FillRow {
        fn name(&self) -> &str {
            "fill_row"
        }

        fn populate(
            &mut self,
            model: &mut dyn GridModel<Entity = u8>,
            _rng: &mut SimRng,
        ) -> Result<usize, InitError> {
            let w = model.structure().width() as i32;
            for x in 0..w {
                model.try_set(Coord::new(x, self.0), 1)?;
            }
            Ok(w as usize)
        }
    }

    fn grid() -> DenseGrid<u8> {
        let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::BLOCK_XY, 4, 4).unwrap();
        DenseGrid::new(s, 0)
    }

    #[test]
    fn sequence_sums_writes() {
        let mut g = grid();
        let mut seq = InitSequence::new().then(FillRow(0)).then(FillRow(2));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.run(&mut g, &mut seeded(0)).unwrap(), 8);
        assert_eq!(g.non_default_count(), 8);
    }

    #[test]
    fn sequence_stops_at_first_error() {
        let mut g = grid();
        let mut seq = InitSequence::new()
            .then(FillRow(1))
            .then(FillRow(9))
            .then(FillRow(3));
        let err = seq.run(&mut g, &mut seeded(0)).unwrap_err();
        assert!(matches!(err, InitError::Store(_)));
        assert_eq!(g.non_default_count(), 4);
    }

    #[test]
    fn default_filter_selects_default_cells() {
        let mut g = grid();
        g.set(Coord::new(0, 0), 3);
        let coords = eligible_coords::<u8>(None, &g);
        assert_eq!(coords.len(), 15);
        assert!(!coords.contains(&Coord::new(0, 0)));

        let only_threes: CellFilter<u8> = Box::new(|_, e| *e == 3);
        assert_eq!(eligible_coords(Some(&only_threes), &g), vec![Coord::new(0, 0)]);
    }
}
