//! cellsim: grid cellular automata and agent simulations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! cellsim sub-crates. For most users, adding `cellsim` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use cellsim::prelude::*;
//!
//! // Conway's Game of Life: B3/S23 on the Moore neighbourhood.
//! struct Life;
//! impl CellRule<bool> for Life {
//!     fn name(&self) -> &str { "life" }
//!     fn next_state(
//!         &mut self,
//!         current: &dyn GridModel<Entity = bool>,
//!         coord: Coord,
//!         _step: StepIndex,
//!     ) -> Result<bool, RuleError> {
//!         let live = count_neighbours(current, coord, NeighbourhoodMode::EdgesAndVertices, |e| *e);
//!         Ok(matches!((*current.get(coord), live), (true, 2) | (_, 3)))
//!     }
//! }
//!
//! // A 32×32 torus, 30% alive, seeded for reproducibility.
//! let config = GridConfig::default().with_size(32, 32).with_seed(7);
//! let mut grid = config.dense(false).unwrap();
//! let mut rng = config.rng();
//! RandomPercent::new(0.3, |_, _: &mut SimRng| true)
//!     .unwrap()
//!     .populate(&mut grid, &mut rng)
//!     .unwrap();
//!
//! let stepper = SyncStepper::from_model(grid, Life);
//! let mut exec = Executor::new(stepper, MaxSteps(50));
//! let result = exec
//!     .execute_steps(100, true, |_, _| ControlFlow::Continue(()))
//!     .unwrap();
//! assert_eq!(result.executed, 50);
//! assert!(exec.is_finished());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellsim-core` | Coordinates, directions, agent IDs, entity trait, step errors |
//! | [`space`] | `cellsim-space` | Grid structure, edge behaviour, neighbourhood resolution |
//! | [`store`] | `cellsim-store` | Dense and sparse grid models, double buffering |
//! | [`init`] | `cellsim-init` | Seeded initializers |
//! | [`engine`] | `cellsim-engine` | Step models, executor, termination, timing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`cellsim-core`).
///
/// Contains [`types::Coord`], [`types::Direction`], [`types::AgentId`] and
/// the [`types::GridEntity`] trait every stored entity implements.
pub use cellsim_core as types;

/// Grid topology (`cellsim-space`).
///
/// [`space::GridStructure`] binds a [`space::CellShape`] to per-axis
/// [`space::GridEdgeBehavior`] and resolves neighbours to a
/// [`space::Resolution`].
pub use cellsim_space as space;

/// Entity storage (`cellsim-store`).
///
/// [`store::DenseGrid`] for busy boards, [`store::SparseGrid`] for mostly
/// empty ones. Both implement [`store::GridModel`].
pub use cellsim_store as store;

/// Seeded population of a fresh model (`cellsim-init`).
pub use cellsim_init as init;

/// Step execution (`cellsim-engine`).
///
/// [`engine::SyncStepper`] for double-buffered cell rules,
/// [`engine::AsyncStepper`] for ordered agents, and [`engine::Executor`]
/// to drive either until a [`engine::TerminationCondition`] holds.
pub use cellsim_engine as engine;

/// Common imports for typical cellsim usage.
///
/// ```rust
/// use cellsim::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cellsim_core::{
        AgentId, Coord, Direction, EntityKind, GridEntity, RuleError, StepError, StepIndex,
    };

    // Space
    pub use cellsim_space::{
        CellShape, EdgeBehavior, GridEdgeBehavior, GridStructure, NeighbourhoodMode, Resolution,
        SpaceError,
    };

    // Storage
    pub use cellsim_store::{
        count_neighbours, DenseGrid, GridModel, GridModelExt, SparseGrid, StoreError,
    };

    // Initializers
    pub use cellsim_init::{
        Counted, InitError, InitSequence, Initializer, Pattern, RandomPercent, ShuffledCounted,
        SimRng,
    };

    // Engine
    pub use cellsim_engine::{
        AgentContext, AgentLogic, AsyncStepper, CellRule, ExecutionResult, Executor, GridConfig,
        MaxSteps, RunState, StepTimingStatistics, SyncStepper, TerminationCondition,
    };
}
