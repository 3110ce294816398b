//! Grid storage for cellsim simulations.
//!
//! A [`GridModel`] is conceptually a total function from coordinate to
//! entity, with one default entity standing for "empty". Two backends
//! implement it with identical observable behaviour:
//!
//! - [`DenseGrid`]: one slot per cell; O(1) access; non-default
//!   iteration scans the whole grid
//! - [`SparseGrid`]: only non-default cells are stored; non-default
//!   iteration costs O(occupied)
//!
//! The choice is made by the caller at construction time and never
//! changes. [`DoubleBuffer`] pairs two models for synchronous stepping.
//!
//! # Architecture
//!
//! ```text
//! GridModel (trait, object-safe)
//! ├── DenseGrid   Vec<E> indexed by row-major rank
//! ├── SparseGrid  BTreeMap<rank, E> of non-default cells
//! └── DoubleBuffer<M>  [M; 2] + current index, O(1) swap
//! ```
//!
//! # Complexity
//!
//! | Operation | `DenseGrid` | `SparseGrid` |
//! |-----------|-------------|--------------|
//! | `get` / `set` | O(1) | O(log k) |
//! | `non_default_cells` (full pass) | O(cells) | O(k) |
//! | `non_default_count` | O(1) | O(1) |
//! | `count_entities` | O(cells) | O(k) |
//!
//! `k` is the number of non-default cells. `SparseGrid` uses an ordered
//! map rather than a hash map, so its access is logarithmic rather than
//! O(1) expected; in exchange, iteration comes out in row-major order
//! without a sort. Pick `DenseGrid` when per-cell access dominates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod error;
pub mod model;
pub mod pingpong;
pub mod query;
pub mod sparse;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseGrid;
pub use error::StoreError;
pub use model::{GridCell, GridModel};
pub use pingpong::DoubleBuffer;
pub use query::{count_neighbours, neighbour_cells, GridModelExt};
pub use sparse::SparseGrid;
