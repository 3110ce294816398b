//! Independent per-cell placement with a fixed probability.

use cellsim_core::{Coord, GridEntity};
use cellsim_store::GridModel;
use rand::Rng;

use crate::error::{check_probability, InitError};
use crate::initializer::{is_eligible, CellFilter, Initializer};
use crate::rng::SimRng;

/// Marks each eligible cell with probability `p`.
///
/// Cells are visited in row-major order and exactly one Bernoulli draw is
/// made per eligible cell, followed by whatever draws the factory makes
/// for a selected cell. The factory receives the generator so that agent
/// attributes are seeded from the same stream.
pub struct RandomPercent<E, F> {
    probability: f64,
    factory: F,
    filter: Option<CellFilter<E>>,
}

impl<E, F> RandomPercent<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    /// Place `factory` output at each eligible cell with `probability`.
    ///
    /// Returns `Err(InitError::InvalidProbability)` unless
    /// `0 <= probability <= 1`.
    pub fn new(probability: f64, factory: F) -> Result<Self, InitError> {
        Ok(Self {
            probability: check_probability(probability)?,
            factory,
            filter: None,
        })
    }

    /// Restrict eligibility to cells passing `filter` (default: cells
    /// holding the default entity).
    pub fn only_where(mut self, filter: impl Fn(Coord, &E) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// The configured probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<E, F> Initializer<E> for RandomPercent<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    fn name(&self) -> &str {
        "random_percent"
    }

    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        let structure = *model.structure();
        let mut written = 0;
        for coord in structure.coords() {
            if !is_eligible(self.filter.as_ref(), model, coord) {
                continue;
            }
            if rng.random_bool(self.probability) {
                let entity = (self.factory)(coord, rng);
                model.try_set(coord, entity)?;
                written += 1;
            }
        }
        Ok(written)
    }
}
