//! When a run is complete.
//!
//! Termination is evaluated by the [`Executor`](crate::Executor), never by
//! step logic, so "how to compute a step" and "when to stop" stay
//! independent.

use cellsim_core::GridEntity;
use cellsim_store::{GridModel, GridModelExt};

use crate::metrics::StepTimingStatistics;

/// Predicate over (model, executed step count, timing statistics).
///
/// Implemented for closures of the matching shape; see [`predicate`] for
/// a helper that pins down the closure's argument types.
pub trait TerminationCondition<E: GridEntity> {
    /// Whether the run is complete.
    fn is_met(
        &self,
        model: &dyn GridModel<Entity = E>,
        steps: u64,
        stats: &StepTimingStatistics,
    ) -> bool;
}

impl<E, F> TerminationCondition<E> for F
where
    E: GridEntity,
    F: Fn(&dyn GridModel<Entity = E>, u64, &StepTimingStatistics) -> bool,
{
    fn is_met(
        &self,
        model: &dyn GridModel<Entity = E>,
        steps: u64,
        stats: &StepTimingStatistics,
    ) -> bool {
        self(model, steps, stats)
    }
}

/// Identity function that gives a closure the termination signature.
///
/// # Examples
///
/// ```
/// use cellsim_engine::{predicate, TerminationCondition};
///
/// let after_ten = predicate::<bool, _>(|_, steps, _| steps >= 10);
/// # fn check<C: TerminationCondition<bool>>(_: &C) {}
/// # check(&after_ten);
/// ```
pub fn predicate<E, F>(f: F) -> F
where
    E: GridEntity,
    F: Fn(&dyn GridModel<Entity = E>, u64, &StepTimingStatistics) -> bool,
{
    f
}

/// Never terminates; the caller decides when to stop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl<E: GridEntity> TerminationCondition<E> for Never {
    fn is_met(&self, _: &dyn GridModel<Entity = E>, _: u64, _: &StepTimingStatistics) -> bool {
        false
    }
}

/// Terminates once `n` steps have been executed.
#[derive(Clone, Copy, Debug)]
pub struct MaxSteps(pub u64);

impl<E: GridEntity> TerminationCondition<E> for MaxSteps {
    fn is_met(&self, _: &dyn GridModel<Entity = E>, steps: u64, _: &StepTimingStatistics) -> bool {
        steps >= self.0
    }
}

/// Terminates once no cell satisfies a predicate (e.g. "all cells dead",
/// "no fire left").
pub struct NoneRemaining<P> {
    predicate: P,
}

impl<P> NoneRemaining<P> {
    /// Terminate when no entity satisfies `predicate`.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<E, P> TerminationCondition<E> for NoneRemaining<P>
where
    E: GridEntity,
    P: Fn(&E) -> bool,
{
    fn is_met(&self, model: &dyn GridModel<Entity = E>, _: u64, _: &StepTimingStatistics) -> bool {
        model.count_where(|e| (self.predicate)(e)) == 0
    }
}

/// Terminates as soon as any inner condition does.
pub struct AnyOf<E> {
    conditions: Vec<Box<dyn TerminationCondition<E>>>,
}

impl<E: GridEntity> AnyOf<E> {
    /// No conditions: never met until one is added.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Add a condition.
    pub fn or(mut self, condition: impl TerminationCondition<E> + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
}

impl<E: GridEntity> Default for AnyOf<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GridEntity> TerminationCondition<E> for AnyOf<E> {
    fn is_met(
        &self,
        model: &dyn GridModel<Entity = E>,
        steps: u64,
        stats: &StepTimingStatistics,
    ) -> bool {
        self.conditions
            .iter()
            .any(|c| c.is_met(model, steps, stats))
    }
}
