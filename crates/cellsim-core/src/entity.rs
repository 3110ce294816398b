//! The [`GridEntity`] capability trait.

use crate::id::AgentId;
use std::fmt::Debug;

/// Capability class of a grid entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// State never changes after construction. Safe to clone freely and
    /// to place at any number of coordinates (e.g. "dead", "water").
    Constant,
    /// Carries per-instance state and resides at no more than one
    /// coordinate at a time.
    Agent,
}

/// A payload stored in a grid cell.
///
/// Domains model their entities as one closed enum whose variants are
/// either constants or agents; storage never needs to know which variant
/// it holds. Agents must be *moved* between coordinates (see
/// `GridModel::move_entity`), never cloned onto a second cell.
///
/// # Examples
///
/// ```
/// use cellsim_core::{AgentId, EntityKind, GridEntity};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Ocean {
///     Water,
///     Fish { id: AgentId, energy: u32 },
/// }
///
/// impl GridEntity for Ocean {
///     fn kind(&self) -> EntityKind {
///         match self {
///             Ocean::Water => EntityKind::Constant,
///             Ocean::Fish { .. } => EntityKind::Agent,
///         }
///     }
///
///     fn agent_id(&self) -> Option<AgentId> {
///         match self {
///             Ocean::Fish { id, .. } => Some(*id),
///             Ocean::Water => None,
///         }
///     }
/// }
///
/// assert!(Ocean::Water.is_constant());
/// assert!(Ocean::Fish { id: AgentId(3), energy: 5 }.is_agent());
/// ```
pub trait GridEntity: Clone + PartialEq + Debug {
    /// Capability class of this value.
    fn kind(&self) -> EntityKind;

    /// Spawn identity for agent variants; `None` for constants.
    ///
    /// Every agent stepped asynchronously must return `Some`; an ordered
    /// step rejects an agent without one rather than silently skipping
    /// it. Agents only used with synchronous rules may leave this as
    /// `None`.
    fn agent_id(&self) -> Option<AgentId> {
        None
    }

    /// Shorthand for `kind() == EntityKind::Agent`.
    fn is_agent(&self) -> bool {
        self.kind() == EntityKind::Agent
    }

    /// Shorthand for `kind() == EntityKind::Constant`.
    fn is_constant(&self) -> bool {
        self.kind() == EntityKind::Constant
    }
}

impl GridEntity for bool {
    fn kind(&self) -> EntityKind {
        EntityKind::Constant
    }
}

impl GridEntity for u8 {
    fn kind(&self) -> EntityKind {
        EntityKind::Constant
    }
}

impl GridEntity for u32 {
    fn kind(&self) -> EntityKind {
        EntityKind::Constant
    }
}
