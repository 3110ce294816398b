//! Benchmark profiles for the cellsim simulation engine.
//!
//! - [`reference_config`]: 100x100 torus (10K cells)
//! - [`stress_config`]: 316x316 torus (~100K cells)
//! - [`life_board`]: a dense boolean board seeded at a given density
//! - [`scattered_sparse`]: a sparse board with a fixed number of occupied cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellsim_engine::GridConfig;
use cellsim_init::{Counted, Initializer, RandomPercent, SimRng};
use cellsim_store::{DenseGrid, SparseGrid};

/// 100x100 square torus, seed 42.
pub fn reference_config() -> GridConfig {
    GridConfig::default().with_size(100, 100).with_seed(42)
}

/// 316x316 square torus, seed 42.
pub fn stress_config() -> GridConfig {
    GridConfig::default().with_size(316, 316).with_seed(42)
}

/// Dense board with each cell alive with probability `density`.
///
/// # Panics
///
/// Panics if `config` is invalid or `density` is outside `[0, 1]`.
pub fn life_board(config: &GridConfig, density: f64) -> DenseGrid<bool> {
    let mut board = config.dense(false).expect("benchmark config is valid");
    let mut rng = config.rng();
    RandomPercent::new(density, |_, _: &mut SimRng| true)
        .expect("density is a probability")
        .populate(&mut board, &mut rng)
        .expect("random fill cannot run out of cells");
    board
}

/// Sparse board with exactly `occupied` cells set to a non-zero value.
///
/// # Panics
///
/// Panics if `config` is invalid or `occupied` exceeds the cell count.
pub fn scattered_sparse(config: &GridConfig, occupied: usize) -> SparseGrid<u8> {
    let mut board = config.sparse(0u8).expect("benchmark config is valid");
    let mut rng = config.rng();
    Counted::new(occupied, |_, _: &mut SimRng| 1u8)
        .populate(&mut board, &mut rng)
        .expect("occupied fits the board");
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsim_store::GridModel;

    #[test]
    fn profiles_are_reproducible() {
        let a = life_board(&reference_config(), 0.25);
        let b = life_board(&reference_config(), 0.25);
        assert!(a.non_default_coords().eq(b.non_default_coords()));
        assert_eq!(scattered_sparse(&reference_config(), 50).non_default_count(), 50);
    }
}
