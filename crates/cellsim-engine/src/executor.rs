//! Driving a step runner to completion.

use std::fmt;
use std::ops::ControlFlow;
use std::time::Duration;

use cellsim_core::{StepError, StepIndex};
use cellsim_store::GridModel;
use tracing::{debug, info, warn};

use crate::metrics::StepTimingStatistics;
use crate::runner::{StepRunner, TimedRunner};
use crate::termination::{Never, TerminationCondition};

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Waiting for a step request.
    Ready,
    /// A step is being computed.
    Stepping,
    /// The termination condition has held; step requests are no-ops.
    Finished,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Stepping => f.write_str("stepping"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

/// Summary of a step request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Steps executed over the whole run, after this request.
    pub total_steps: u64,
    /// Steps executed by this request.
    pub executed: u64,
    /// Whether the termination condition holds.
    pub terminated: bool,
    /// Whether the per-step callback cut the request short.
    pub interrupted: bool,
}

type Condition<R> = Box<dyn TerminationCondition<<<R as StepRunner>::Model as GridModel>::Entity>>;

/// Runs steps of a [`StepRunner`], times them, and applies a
/// [`TerminationCondition`].
///
/// The executor owns its runner and therefore the model; it cannot exist
/// before there is something to step.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use cellsim_core::{Coord, RuleError, StepIndex};
/// use cellsim_engine::{CellRule, Executor, MaxSteps, SyncStepper};
/// use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
/// use cellsim_store::{DenseGrid, GridModel};
///
/// struct Flip;
/// impl CellRule<bool> for Flip {
///     fn name(&self) -> &str { "flip" }
///     fn next_state(
///         &mut self,
///         current: &dyn GridModel<Entity = bool>,
///         coord: Coord,
///         _step: StepIndex,
///     ) -> Result<bool, RuleError> {
///         Ok(!*current.get(coord))
///     }
/// }
///
/// let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 4, 4).unwrap();
/// let stepper = SyncStepper::from_model(DenseGrid::new(s, false), Flip);
/// let mut exec = Executor::new(stepper, MaxSteps(3));
/// let result = exec.execute_steps(10, true, |_, _| ControlFlow::Continue(())).unwrap();
/// assert_eq!(result.executed, 3);
/// assert!(exec.is_finished());
/// assert_eq!(exec.model().non_default_count(), 16);
/// ```
pub struct Executor<R: StepRunner> {
    runner: TimedRunner<R>,
    termination: Condition<R>,
    step_count: u64,
    state: RunState,
}

impl<R> Executor<R>
where
    R: StepRunner,
    <R::Model as GridModel>::Entity: 'static,
{
    /// Drive `runner` until `termination` holds.
    pub fn new(
        runner: R,
        termination: impl TerminationCondition<<R::Model as GridModel>::Entity> + 'static,
    ) -> Self {
        Self {
            runner: TimedRunner::new(runner),
            termination: Box::new(termination),
            step_count: 0,
            state: RunState::Ready,
        }
    }

    /// Drive `runner` with no termination condition.
    pub fn unbounded(runner: R) -> Self {
        Self::new(runner, Never)
    }
}

impl<R: StepRunner> Executor<R> {
    /// Run exactly one step, then evaluate the termination condition.
    ///
    /// On a finished run this does nothing and reports zero steps
    /// executed. A step error is returned unchanged; the step is not
    /// counted and the run stays ready.
    pub fn execute_step(&mut self) -> Result<ExecutionResult, StepError> {
        if self.is_finished() {
            warn!(steps = self.step_count, "step requested on finished run");
            return Ok(self.result(0, false));
        }
        self.run_one()?;
        let terminated = self.check_termination();
        let mut result = self.result(1, false);
        result.terminated = terminated;
        Ok(result)
    }

    /// Run up to `count` steps.
    ///
    /// With `check_each`, the termination condition is evaluated after
    /// every step and the batch stops as soon as it holds; otherwise it is
    /// evaluated once, after the batch. `on_step` is called after every
    /// executed step with the published model and the run's step count;
    /// returning `ControlFlow::Break` ends the batch and marks it
    /// interrupted.
    pub fn execute_steps<F>(
        &mut self,
        count: u64,
        check_each: bool,
        mut on_step: F,
    ) -> Result<ExecutionResult, StepError>
    where
        F: FnMut(&R::Model, u64) -> ControlFlow<()>,
    {
        if self.is_finished() {
            warn!(steps = self.step_count, "steps requested on finished run");
            return Ok(self.result(0, false));
        }
        let mut executed = 0;
        let mut interrupted = false;
        for _ in 0..count {
            self.run_one()?;
            executed += 1;
            let terminated = check_each && self.check_termination();
            let flow = on_step(self.runner.model(), self.step_count);
            if terminated {
                break;
            }
            if flow.is_break() {
                interrupted = true;
                break;
            }
        }
        if !check_each {
            self.check_termination();
        }
        Ok(self.result(executed, interrupted))
    }

    /// Evaluate the termination condition now.
    ///
    /// Once it has held the run is finished for good, even if the
    /// condition would later change its mind.
    pub fn check_termination(&mut self) -> bool {
        if self.is_finished() {
            return true;
        }
        let model = self.runner.model();
        if self
            .termination
            .is_met(model, self.step_count, self.runner.statistics())
        {
            self.state = RunState::Finished;
            info!(steps = self.step_count, runner = self.runner.name(), "run terminated");
        }
        self.is_finished()
    }

    /// Whether the termination condition has held.
    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Steps executed so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// The published model.
    pub fn model(&self) -> &R::Model {
        self.runner.model()
    }

    /// Mutable access to the published model, for edits between steps.
    pub fn model_mut(&mut self) -> &mut R::Model {
        self.runner.model_mut()
    }

    /// The driven runner.
    pub fn runner(&self) -> &R {
        self.runner.inner()
    }

    /// The driven runner, mutably; used to adjust rule or logic state
    /// between steps.
    pub fn runner_mut(&mut self) -> &mut R {
        self.runner.inner_mut()
    }

    /// Step timing gathered so far.
    pub fn statistics(&self) -> &StepTimingStatistics {
        self.runner.statistics()
    }

    /// Duration of the most recent step.
    pub fn last_step_duration(&self) -> Option<Duration> {
        self.runner.statistics().last()
    }

    /// Forget gathered step timing.
    pub fn reset_statistics(&mut self) {
        self.runner.reset_statistics();
    }

    /// Consume the executor, returning the runner.
    pub fn into_runner(self) -> R {
        self.runner.into_inner()
    }

    fn run_one(&mut self) -> Result<(), StepError> {
        let index = StepIndex(self.step_count).next();
        self.state = RunState::Stepping;
        let outcome = self.runner.step(index);
        self.state = RunState::Ready;
        outcome?;
        self.step_count = index.0;
        debug!(
            step = index.0,
            elapsed_us = self.last_step_duration().map_or(0, |d| d.as_micros() as u64),
            "step executed"
        );
        Ok(())
    }

    fn result(&self, executed: u64, interrupted: bool) -> ExecutionResult {
        ExecutionResult {
            total_steps: self.step_count,
            executed,
            terminated: self.is_finished(),
            interrupted,
        }
    }
}
