//! Reusable step logic fixtures.
//!
//! - [`ConwayRule`]: B3/S23 Life over `bool` cells
//! - [`Critter`] with [`WalkerLogic`]: agents that walk forward and turn
//!   clockwise when blocked
//! - [`FailingRule`]: fails deterministically after N calls

use cellsim_core::{AgentId, Coord, Direction, EntityKind, GridEntity, RuleError, StepIndex};
use cellsim_engine::{AgentContext, AgentLogic, CellRule};
use cellsim_space::NeighbourhoodMode;
use cellsim_store::{count_neighbours, GridModel};

/// Conway's Game of Life: born with 3 live neighbours, survives with 2 or 3.
///
/// Neighbours are counted over edges and vertices, through the grid's
/// edge behaviour.
#[derive(Clone, Debug, Default)]
pub struct ConwayRule {
    pub evaluations: u64,
}

impl ConwayRule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CellRule<bool> for ConwayRule {
    fn name(&self) -> &str {
        "conway"
    }

    fn next_state(
        &mut self,
        current: &dyn GridModel<Entity = bool>,
        coord: Coord,
        _step: StepIndex,
    ) -> Result<bool, RuleError> {
        self.evaluations += 1;
        let alive = *current.try_get(coord)?;
        let n = count_neighbours(current, coord, NeighbourhoodMode::EdgesAndVertices, |e| *e);
        Ok(matches!((alive, n), (true, 2) | (true, 3) | (false, 3)))
    }
}

/// Entity for agent tests: empty ground, walls, and walking agents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Critter {
    Ground,
    Wall,
    Walker { id: AgentId, heading: Direction },
}

impl Critter {
    pub fn walker(id: AgentId, heading: Direction) -> Self {
        Critter::Walker { id, heading }
    }

    pub fn heading(&self) -> Option<Direction> {
        match self {
            Critter::Walker { heading, .. } => Some(*heading),
            _ => None,
        }
    }
}

impl GridEntity for Critter {
    fn kind(&self) -> EntityKind {
        match self {
            Critter::Ground | Critter::Wall => EntityKind::Constant,
            Critter::Walker { .. } => EntityKind::Agent,
        }
    }

    fn agent_id(&self) -> Option<AgentId> {
        match self {
            Critter::Walker { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Moves each walker one cell along its heading if that cell is ground;
/// otherwise turns it clockwise in place.
///
/// Records `(agent, from, to)` for every action so tests can check
/// ordering and visibility.
#[derive(Clone, Debug, Default)]
pub struct WalkerLogic {
    pub log: Vec<(AgentId, Coord, Coord)>,
}

impl WalkerLogic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AgentLogic<Critter> for WalkerLogic {
    fn name(&self) -> &str {
        "walker"
    }

    fn act(
        &mut self,
        ctx: &mut AgentContext<'_, Critter>,
        agent: AgentId,
        at: Coord,
        _step: StepIndex,
    ) -> Result<(), RuleError> {
        let heading = ctx
            .get(at)?
            .heading()
            .ok_or_else(|| RuleError::ConstraintViolation {
                constraint: format!("{agent} is not a walker"),
            })?;
        let ahead = ctx
            .structure()
            .neighbour(at, heading)
            .and_then(|r| r.coord())
            .filter(|&c| ctx.is_vacant(c));
        match ahead {
            Some(to) => {
                ctx.move_entity(at, to)?;
                self.log.push((agent, at, to));
            }
            None => {
                ctx.set(at, Critter::walker(agent, heading.rotate_cw()))?;
                self.log.push((agent, at, at));
            }
        }
        Ok(())
    }
}

/// Copies the current entity until `succeed_count` calls have been made,
/// then fails every call.
#[derive(Clone, Debug)]
pub struct FailingRule {
    pub succeed_count: u64,
    calls: u64,
}

impl FailingRule {
    pub fn new(succeed_count: u64) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `next_state()` has been called.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl<E: GridEntity> CellRule<E> for FailingRule {
    fn name(&self) -> &str {
        "failing"
    }

    fn next_state(
        &mut self,
        current: &dyn GridModel<Entity = E>,
        coord: Coord,
        _step: StepIndex,
    ) -> Result<E, RuleError> {
        let n = self.calls;
        self.calls += 1;
        if n >= self.succeed_count {
            return Err(RuleError::failed(format!(
                "deliberate failure after {} successful calls",
                self.succeed_count
            )));
        }
        Ok(current.try_get(coord)?.clone())
    }
}
