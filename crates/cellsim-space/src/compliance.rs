//! Grid structure compliance test helpers.
//!
//! These functions verify that a [`GridStructure`] satisfies the topology
//! invariants the rest of the workspace relies on. Reused across every
//! shape and edge-behaviour combination in the unit tests.

use crate::edge::Resolution;
use crate::neighbourhood::NeighbourhoodMode;
use crate::structure::GridStructure;
use indexmap::IndexSet;

const MODES: [NeighbourhoodMode; 2] = [NeighbourhoodMode::EdgesOnly, NeighbourhoodMode::EdgesAndVertices];

/// Assert that `coords()` yields exactly `cell_count` unique coordinates
/// in row-major order.
pub fn assert_coords_complete(grid: &GridStructure) {
    let coords: Vec<_> = grid.coords().collect();
    assert_eq!(
        coords.len(),
        grid.cell_count(),
        "coords() length ({}) != cell_count ({})",
        coords.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = coords.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "coords() has duplicates");
    let mut sorted = coords.clone();
    sorted.sort();
    assert_eq!(coords, sorted, "coords() is not row-major");
}

/// Assert that `coord_at(rank(c)) == c` for every cell.
pub fn assert_rank_round_trip(grid: &GridStructure) {
    for (i, coord) in grid.coords().enumerate() {
        assert_eq!(grid.rank(coord), Some(i), "rank({coord}) != {i}");
        assert_eq!(grid.coord_at(i), Some(coord), "coord_at({i}) != {coord}");
    }
}

/// Assert that each cell lists each direction at most once.
pub fn assert_directions_unique(grid: &GridStructure) {
    for coord in grid.coords() {
        for mode in MODES {
            let n = grid.resolve_neighbours(coord, mode);
            let dirs: IndexSet<_> = n.iter().map(|nb| nb.direction).collect();
            assert_eq!(dirs.len(), n.len(), "duplicate direction around {coord}");
            assert_eq!(n.len(), grid.shape().neighbour_count(mode));
        }
    }
}

/// Assert that every usable resolution lands on the grid.
pub fn assert_resolutions_in_bounds(grid: &GridStructure) {
    for coord in grid.coords() {
        for mode in MODES {
            for nb in grid.resolve_neighbours(coord, mode) {
                if let Some(c) = nb.coord() {
                    assert!(grid.contains(c), "{nb:?} of {coord} resolved off-grid");
                }
                if grid.contains(nb.raw) {
                    assert_eq!(nb.resolution, Resolution::Valid(nb.raw));
                }
            }
        }
    }
}

/// Assert that stepping to a valid or wrapped neighbour and back in the
/// opposite direction returns to the origin.
pub fn assert_steps_reversible(grid: &GridStructure) {
    for coord in grid.coords() {
        for mode in MODES {
            for nb in grid.resolve_neighbours(coord, mode) {
                let target = match nb.resolution {
                    Resolution::Valid(c) | Resolution::Wrapped(c) => c,
                    Resolution::Absorbed(_) | Resolution::Blocked => continue,
                };
                let back = grid
                    .neighbour(target, nb.direction.opposite())
                    .and_then(|r| r.coord());
                assert_eq!(
                    back,
                    Some(coord),
                    "{coord} -> {} -> {target} does not reverse",
                    nb.direction
                );
            }
        }
    }
}

/// Assert that a toroidal grid never blocks.
pub fn assert_torus_never_blocks(grid: &GridStructure) {
    if !grid.edge_behavior().is_toroidal() {
        return;
    }
    for coord in grid.coords() {
        for mode in MODES {
            assert!(grid
                .resolve_neighbours(coord, mode)
                .iter()
                .all(|nb| !nb.resolution.is_blocked()));
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &GridStructure) {
    assert_coords_complete(grid);
    assert_rank_round_trip(grid);
    assert_directions_unique(grid);
    assert_resolutions_in_bounds(grid);
    assert_steps_reversible(grid);
    assert_torus_never_blocks(grid);
}
