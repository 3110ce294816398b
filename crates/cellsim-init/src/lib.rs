//! Deterministic population strategies for cellsim grids.
//!
//! Every strategy draws from one explicitly threaded [`SimRng`] and visits
//! cells in a fixed order, so identical (seed, structure, strategy
//! sequence) triples reproduce identical grids.
//!
//! - [`RandomPercent`]: each eligible cell independently with probability p
//! - [`Counted`]: exactly N eligible cells, sampled without replacement
//! - [`ShuffledCounted`]: up to N eligible cells from a full shuffle
//! - [`Pattern`]: fixed offsets around an anchor, resolved through the
//!   grid's edge behaviour
//!
//! Strategies compose through [`InitSequence`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod counted;
pub mod error;
pub mod initializer;
pub mod pattern;
pub mod random;
pub mod rng;

pub use counted::{Counted, ShuffledCounted};
pub use error::InitError;
pub use initializer::{CellFilter, InitSequence, Initializer};
pub use pattern::Pattern;
pub use random::RandomPercent;
pub use rng::{seeded, SimRng};
