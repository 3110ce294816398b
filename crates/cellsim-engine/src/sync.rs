//! Synchronous whole-grid stepping over a double buffer.

use cellsim_core::{Coord, GridEntity, RuleError, StepError, StepIndex};
use cellsim_store::{DoubleBuffer, GridModel, StoreError};

use crate::runner::StepRunner;

/// Per-cell transition of a synchronous simulation.
///
/// Called once for every coordinate of the grid each step. `current` is
/// the frozen pre-step generation: writes made during the step land in a
/// separate buffer and are never visible here, so the result does not
/// depend on the order in which cells are visited.
pub trait CellRule<E: GridEntity> {
    /// Name of the rule, for logs and errors.
    fn name(&self) -> &str;

    /// The entity `coord` holds in generation `step`.
    fn next_state(
        &mut self,
        current: &dyn GridModel<Entity = E>,
        coord: Coord,
        step: StepIndex,
    ) -> Result<E, RuleError>;
}

/// Runs a [`CellRule`] over every cell, double buffered.
///
/// Each step clears the next buffer to the default entity, evaluates the
/// rule for every coordinate in row-major order, then swaps. A failing
/// rule abandons the step before the swap; the published model is
/// unchanged.
pub struct SyncStepper<M, R> {
    buffer: DoubleBuffer<M>,
    rule: R,
}

impl<M, R> SyncStepper<M, R>
where
    M: GridModel,
    R: CellRule<M::Entity>,
{
    /// Step `current` with `rule`, using `next` as the write buffer.
    ///
    /// `next`'s contents are irrelevant; it is cleared before every step.
    /// Returns `Err(StepError::StructureMismatch)` if the two models are
    /// bound to different structures, `Err(StepError::DefaultMismatch)` if
    /// their default entities differ.
    pub fn new(current: M, next: M, rule: R) -> Result<Self, StepError> {
        let buffer = DoubleBuffer::new(current, next).map_err(|e| match e {
            StoreError::DefaultMismatch { .. } => StepError::DefaultMismatch,
            _ => StepError::StructureMismatch,
        })?;
        Ok(Self { buffer, rule })
    }

    /// Step `current` with `rule`, allocating the write buffer as a clone.
    pub fn from_model(current: M, rule: R) -> Self
    where
        M: Clone,
    {
        Self {
            buffer: DoubleBuffer::from_clone(current),
            rule,
        }
    }

    /// The bound rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The bound rule, mutably.
    pub fn rule_mut(&mut self) -> &mut R {
        &mut self.rule
    }

    /// Consume the stepper, keeping the published model.
    pub fn into_model(self) -> M {
        self.buffer.into_current()
    }
}

impl<M, R> StepRunner for SyncStepper<M, R>
where
    M: GridModel,
    R: CellRule<M::Entity>,
{
    type Model = M;

    fn name(&self) -> &str {
        self.rule.name()
    }

    fn model(&self) -> &M {
        self.buffer.current()
    }

    fn model_mut(&mut self) -> &mut M {
        self.buffer.current_mut()
    }

    fn step(&mut self, index: StepIndex) -> Result<(), StepError> {
        let (current, next) = self.buffer.split();
        next.clear();
        let structure = *current.structure();
        for coord in structure.coords() {
            let entity = self
                .rule
                .next_state(current, coord, index)
                .map_err(|reason| StepError::RuleFailed {
                    name: self.rule.name().to_string(),
                    reason,
                })?;
            // Coordinates come from the shared structure, so this never panics.
            next.set(coord, entity);
        }
        self.buffer.swap();
        Ok(())
    }
}
