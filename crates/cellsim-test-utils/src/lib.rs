//! Test utilities for cellsim development.
//!
//! Grid constructors and well-known Life patterns live here; step logic
//! fixtures live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cellsim_core::Coord;
use cellsim_init::Pattern;
use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
use cellsim_store::GridModel;

/// Square grid; panics on invalid extents.
pub fn square(width: u32, height: u32, edge: GridEdgeBehavior) -> GridStructure {
    GridStructure::new(CellShape::Square, edge, width, height)
        .unwrap_or_else(|e| panic!("bad test grid: {e}"))
}

/// Hexagonal grid; panics on invalid extents.
pub fn hexagon(width: u32, height: u32, edge: GridEdgeBehavior) -> GridStructure {
    GridStructure::new(CellShape::Hexagon, edge, width, height)
        .unwrap_or_else(|e| panic!("bad test grid: {e}"))
}

/// Horizontal period-2 oscillator centred on `centre`.
pub fn blinker(centre: Coord) -> Pattern<bool> {
    Pattern::new(centre).with_all([(-1, 0), (0, 0), (1, 0)], true)
}

/// South-east travelling glider with its bounding box at `top_left`.
pub fn glider(top_left: Coord) -> Pattern<bool> {
    Pattern::new(top_left).with_all([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)], true)
}

/// 2×2 still life with its top-left cell at `top_left`.
pub fn block(top_left: Coord) -> Pattern<bool> {
    Pattern::new(top_left).with_all([(0, 0), (1, 0), (0, 1), (1, 1)], true)
}

/// Non-default coordinates, row-major.
pub fn live_cells<M: GridModel + ?Sized>(model: &M) -> Vec<Coord> {
    model.non_default_coords().collect()
}
