//! Asynchronous, ordered-agent stepping over one shared model.
//!
//! Each step takes a snapshot of the agents present at step start, sorts
//! it with [`AgentLogic::order`], and invokes [`AgentLogic::act`] once
//! per agent. Every mutation goes through an [`AgentContext`], which
//! keeps an agent → position index current, so:
//!
//! - a cell vacated by an earlier agent is immediately usable by a later
//!   one
//! - an agent removed earlier in the step is skipped, even if another
//!   agent now stands on its old coordinate
//! - an agent spawned during the step waits for the next step

use std::cmp::Ordering;

use cellsim_core::{AgentId, AgentIdAllocator, Coord, GridEntity, RuleError, StepError, StepIndex};
use cellsim_space::GridStructure;
use cellsim_store::{GridModel, StoreError};
use indexmap::IndexMap;
use tracing::trace;

use crate::runner::StepRunner;

/// Behaviour of the agents in an asynchronous simulation.
pub trait AgentLogic<E: GridEntity> {
    /// Name of the logic, for logs and errors.
    fn name(&self) -> &str;

    /// Processing order for the step's agent snapshot.
    ///
    /// Must be a deterministic total order. The default is ascending
    /// spawn sequence, which is independent of grid position.
    fn order(&self, a: (AgentId, &E), b: (AgentId, &E)) -> Ordering {
        a.0.cmp(&b.0)
    }

    /// Let agent `agent`, currently at `at`, act on the shared model.
    fn act(
        &mut self,
        ctx: &mut AgentContext<'_, E>,
        agent: AgentId,
        at: Coord,
        step: StepIndex,
    ) -> Result<(), RuleError>;
}

/// Mutable view of the shared model handed to [`AgentLogic::act`].
///
/// Writes are visible immediately to the rest of the step. All methods
/// that take a coordinate return `Err(StoreError::Space)` for off-grid
/// input; `StoreError` converts into [`RuleError`] so logic can use `?`.
pub struct AgentContext<'a, E: GridEntity> {
    model: &'a mut dyn GridModel<Entity = E>,
    positions: &'a mut IndexMap<AgentId, Coord>,
    ids: &'a mut AgentIdAllocator,
}

impl<'a, E: GridEntity> AgentContext<'a, E> {
    /// The grid's structure.
    pub fn structure(&self) -> &GridStructure {
        self.model.structure()
    }

    /// Read-only view of the shared model.
    pub fn model(&self) -> &dyn GridModel<Entity = E> {
        &*self.model
    }

    /// Entity at `coord`.
    pub fn get(&self, coord: Coord) -> Result<&E, StoreError> {
        self.model.try_get(coord)
    }

    /// Whether `coord` is on the grid and holds the default entity.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.model
            .try_get(coord)
            .is_ok_and(|e| e == self.model.default_entity())
    }

    /// Replace the entity at `coord`, returning the previous occupant.
    ///
    /// An agent previously at `coord` counts as removed. Writing an agent
    /// that already resides elsewhere violates single residency; use
    /// [`move_entity`](Self::move_entity) to relocate.
    pub fn set(&mut self, coord: Coord, entity: E) -> Result<E, StoreError> {
        let incoming = entity.agent_id();
        let old = self.model.try_set(coord, entity)?;
        self.forget(&old, coord);
        if let Some(id) = incoming {
            self.positions.insert(id, coord);
        }
        Ok(old)
    }

    /// Remove the entity at `coord`, leaving the default.
    pub fn take(&mut self, coord: Coord) -> Result<E, StoreError> {
        let empty = self.model.default_entity().clone();
        self.set(coord, empty)
    }

    /// Move the entity at `from` to `to`, returning whatever `to` held.
    ///
    /// An agent displaced from `to` counts as removed.
    pub fn move_entity(&mut self, from: Coord, to: Coord) -> Result<E, StoreError> {
        let displaced = self.model.move_entity(from, to)?;
        if from == to {
            return Ok(displaced);
        }
        self.forget(&displaced, to);
        if let Some(id) = self.model.try_get(to)?.agent_id() {
            self.positions.insert(id, to);
        }
        Ok(displaced)
    }

    /// Place a new agent at `coord` with a freshly allocated ID.
    ///
    /// The agent is not processed until the next step. Returns the
    /// allocated ID; an agent displaced from `coord` counts as removed.
    pub fn spawn(&mut self, coord: Coord, make: impl FnOnce(AgentId) -> E) -> Result<AgentId, StoreError> {
        self.model.structure().check(coord)?;
        let id = self.ids.next_id();
        self.set(coord, make(id))?;
        Ok(id)
    }

    /// Current position of `agent`, or `None` if it has been removed.
    pub fn position(&self, agent: AgentId) -> Option<Coord> {
        self.positions.get(&agent).copied()
    }

    /// Number of agents currently on the grid.
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    fn forget(&mut self, old: &E, at: Coord) {
        if let Some(id) = old.agent_id() {
            if self.positions.get(&id) == Some(&at) {
                self.positions.swap_remove(&id);
            }
        }
    }
}

/// Runs an [`AgentLogic`] once per agent, in order, on one shared model.
pub struct AsyncStepper<M, L> {
    model: M,
    logic: L,
    positions: IndexMap<AgentId, Coord>,
    ids: AgentIdAllocator,
}

impl<M, L> AsyncStepper<M, L>
where
    M: GridModel,
    L: AgentLogic<M::Entity>,
{
    /// Step `model` with `logic`.
    ///
    /// IDs for agents spawned during steps continue after the highest
    /// agent ID already on the grid.
    pub fn new(model: M, logic: L) -> Self {
        let next = model
            .non_default_cells()
            .filter_map(|cell| cell.entity.agent_id())
            .map(|id| id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self {
            model,
            logic,
            positions: IndexMap::new(),
            ids: AgentIdAllocator::starting_at(next),
        }
    }

    /// Use `ids` for agents spawned during steps.
    pub fn with_allocator(mut self, ids: AgentIdAllocator) -> Self {
        self.ids = ids;
        self
    }

    /// The bound logic.
    pub fn logic(&self) -> &L {
        &self.logic
    }

    /// The bound logic, mutably.
    pub fn logic_mut(&mut self) -> &mut L {
        &mut self.logic
    }

    /// Allocator used for spawned agents.
    pub fn allocator(&self) -> &AgentIdAllocator {
        &self.ids
    }

    /// Consume the stepper, keeping the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Rebuild the position index from the model.
    ///
    /// The model may have been edited through `model_mut` since the last
    /// step, so the index is never carried across steps. An agent without
    /// an ID could never be scheduled and is rejected.
    fn reindex(&mut self) -> Result<(), StepError> {
        self.positions.clear();
        for cell in self.model.non_default_cells() {
            match cell.entity.agent_id() {
                Some(id) => {
                    self.positions.insert(id, cell.coord);
                }
                None if cell.entity.is_agent() => {
                    return Err(StepError::AgentWithoutId { coord: cell.coord });
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Agent IDs present now, in processing order.
    fn snapshot(&self) -> Vec<AgentId> {
        let mut agents: Vec<(AgentId, &M::Entity)> = self
            .positions
            .iter()
            .map(|(&id, &at)| (id, self.model.get(at)))
            .collect();
        agents.sort_by(|a, b| self.logic.order(*a, *b));
        agents.into_iter().map(|(id, _)| id).collect()
    }
}

impl<M, L> StepRunner for AsyncStepper<M, L>
where
    M: GridModel,
    L: AgentLogic<M::Entity>,
{
    type Model = M;

    fn name(&self) -> &str {
        self.logic.name()
    }

    fn model(&self) -> &M {
        &self.model
    }

    fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    fn step(&mut self, index: StepIndex) -> Result<(), StepError> {
        self.reindex()?;
        for agent in self.snapshot() {
            let Some(at) = self.positions.get(&agent).copied() else {
                trace!(%agent, step = index.0, "agent removed earlier in step, skipped");
                continue;
            };
            let mut ctx = AgentContext {
                model: &mut self.model,
                positions: &mut self.positions,
                ids: &mut self.ids,
            };
            self.logic
                .act(&mut ctx, agent, at, index)
                .map_err(|reason| StepError::RuleFailed {
                    name: self.logic.name().to_string(),
                    reason,
                })?;
        }
        Ok(())
    }
}
