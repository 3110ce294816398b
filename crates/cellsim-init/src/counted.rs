//! Placement at a fixed number of randomly chosen cells.

use cellsim_core::{Coord, GridEntity};
use cellsim_store::GridModel;
use rand::seq::{index, SliceRandom};

use crate::error::InitError;
use crate::initializer::{eligible_coords, CellFilter, Initializer};
use crate::rng::SimRng;

/// Places the factory's output at exactly `count` eligible cells, chosen
/// uniformly without replacement.
///
/// Fails with [`InitError::InsufficientCells`] before writing anything if
/// fewer than `count` cells are eligible.
pub struct Counted<E, F> {
    count: usize,
    factory: F,
    filter: Option<CellFilter<E>>,
}

impl<E, F> Counted<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    /// Place `count` entities built by `factory`.
    pub fn new(count: usize, factory: F) -> Self {
        Self {
            count,
            factory,
            filter: None,
        }
    }

    /// Restrict eligibility to cells passing `filter` (default: cells
    /// holding the default entity).
    pub fn only_where(mut self, filter: impl Fn(Coord, &E) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }
}

impl<E, F> Initializer<E> for Counted<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    fn name(&self) -> &str {
        "counted"
    }

    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        let eligible = eligible_coords(self.filter.as_ref(), model);
        if eligible.len() < self.count {
            return Err(InitError::InsufficientCells {
                requested: self.count,
                eligible: eligible.len(),
            });
        }
        let picks = index::sample(rng, eligible.len(), self.count);
        for i in picks.iter() {
            let coord = eligible[i];
            let entity = (self.factory)(coord, rng);
            model.try_set(coord, entity)?;
        }
        Ok(self.count)
    }
}

/// Places the factory's output at the first `count` cells of a full
/// shuffle of the eligible cells.
///
/// Never exceeds `count`; if fewer cells are eligible, every eligible
/// cell is written and the shortfall is not an error.
pub struct ShuffledCounted<E, F> {
    count: usize,
    factory: F,
    filter: Option<CellFilter<E>>,
}

impl<E, F> ShuffledCounted<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    /// Place up to `count` entities built by `factory`.
    pub fn new(count: usize, factory: F) -> Self {
        Self {
            count,
            factory,
            filter: None,
        }
    }

    /// Restrict eligibility to cells passing `filter` (default: cells
    /// holding the default entity).
    pub fn only_where(mut self, filter: impl Fn(Coord, &E) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }
}

impl<E, F> Initializer<E> for ShuffledCounted<E, F>
where
    E: GridEntity,
    F: FnMut(Coord, &mut SimRng) -> E,
{
    fn name(&self) -> &str {
        "shuffled_counted"
    }

    fn populate(
        &mut self,
        model: &mut dyn GridModel<Entity = E>,
        rng: &mut SimRng,
    ) -> Result<usize, InitError> {
        let mut eligible = eligible_coords(self.filter.as_ref(), model);
        eligible.shuffle(rng);
        eligible.truncate(self.count);
        for &coord in &eligible {
            let entity = (self.factory)(coord, rng);
            model.try_set(coord, entity)?;
        }
        Ok(eligible.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use cellsim_core::AgentIdAllocator;
    use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
    use cellsim_store::{GridModelExt, SparseGrid};

    fn grid(w: u32, h: u32) -> SparseGrid<u32> {
        let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::BLOCK_XY, w, h).unwrap();
        SparseGrid::new(s, 0)
    }

    #[test]
    fn counted_places_exactly_n_distinct() {
        let mut g = grid(10, 10);
        let mut ids = AgentIdAllocator::new();
        let n = Counted::new(25, move |_, _| ids.next_id().0 as u32 + 1)
            .populate(&mut g, &mut seeded(5))
            .unwrap();
        assert_eq!(n, 25);
        assert_eq!(g.non_default_count(), 25);
        let mut values: Vec<u32> = g.non_default_cells().map(|c| *c.entity).collect();
        values.sort_unstable();
        assert_eq!(values, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn counted_fails_without_writing_when_short() {
        let mut g = grid(3, 3);
        let err = Counted::new(10, |_, _| 1u32)
            .populate(&mut g, &mut seeded(0))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::InsufficientCells {
                requested: 10,
                eligible: 9
            }
        );
        assert_eq!(g.non_default_count(), 0);
    }

    #[test]
    fn counted_skips_occupied_cells() {
        let mut g = grid(2, 2);
        g.set(Coord::new(0, 0), 7);
        Counted::new(3, |_, _| 1u32)
            .populate(&mut g, &mut seeded(1))
            .unwrap();
        assert_eq!(*g.get(Coord::new(0, 0)), 7);
        assert_eq!(g.count_where(|e| *e == 1), 3);
    }

    #[test]
    fn shuffled_caps_at_eligible() {
        let mut g = grid(3, 3);
        let n = ShuffledCounted::new(50, |_, _| 1u32)
            .populate(&mut g, &mut seeded(0))
            .unwrap();
        assert_eq!(n, 9);
        assert_eq!(g.non_default_count(), 9);
    }

    #[test]
    fn shuffled_respects_filter() {
        let mut g = grid(6, 6);
        let n = ShuffledCounted::new(4, |_, _| 2u32)
            .only_where(|c, _| c.x == c.y)
            .populate(&mut g, &mut seeded(8))
            .unwrap();
        assert_eq!(n, 4);
        assert!(g.non_default_coords().all(|c| c.x == c.y));
    }

    #[test]
    fn both_are_deterministic() {
        let run = |seed: u64, shuffled: bool| {
            let mut g = grid(12, 12);
            let mut rng = seeded(seed);
            if shuffled {
                ShuffledCounted::new(20, |_, _| 1u32).populate(&mut g, &mut rng).unwrap();
            } else {
                Counted::new(20, |_, _| 1u32).populate(&mut g, &mut rng).unwrap();
            }
            g.non_default_coords().collect::<Vec<_>>()
        };
        assert_eq!(run(4, false), run(4, false));
        assert_eq!(run(4, true), run(4, true));
        assert_ne!(run(4, true), run(5, true));
    }
}
