//! Step execution for cellsim grids.
//!
//! Two step models advance a [`GridModel`](cellsim_store::GridModel) by
//! one logical step:
//!
//! - [`SyncStepper`]: every cell's next state is computed by a
//!   [`CellRule`] from the frozen current generation and written into a
//!   separate buffer; the buffers swap once all cells are done
//! - [`AsyncStepper`]: an [`AgentLogic`] acts once per agent, in an
//!   explicit deterministic order, mutating one shared model in place
//!   through an [`AgentContext`]
//!
//! An [`Executor`] drives either one, times each step through a
//! [`TimedRunner`], and stops the run once its [`TerminationCondition`]
//! holds.
//!
//! # Run state
//!
//! ```text
//! Ready ──execute_step──▶ Stepping ──ok──▶ Ready
//!   │                                        │
//!   └────────── termination holds ──────────▶ Finished (further steps are no-ops)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agents;
pub mod config;
pub mod executor;
pub mod metrics;
pub mod runner;
pub mod sync;
pub mod termination;

pub use agents::{AgentContext, AgentLogic, AsyncStepper};
pub use config::{ConfigError, GridConfig};
pub use executor::{ExecutionResult, Executor, RunState};
pub use metrics::StepTimingStatistics;
pub use runner::{StepRunner, TimedRunner};
pub use sync::{CellRule, SyncStepper};
pub use termination::{predicate, AnyOf, MaxSteps, Never, NoneRemaining, TerminationCondition};
