//! Core types and traits for the cellsim grid simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! coordinates, compass directions, agent identifiers, the
//! [`GridEntity`] capability trait, and the step-level error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod entity;
pub mod error;
pub mod id;

pub use direction::Direction;
pub use entity::{EntityKind, GridEntity};
pub use error::{RuleError, StepError};
pub use id::{AgentId, AgentIdAllocator, Coord, StepIndex};
