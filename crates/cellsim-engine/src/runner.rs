//! The [`StepRunner`] abstraction and its timing decorator.

use std::time::Instant;

use cellsim_core::{StepError, StepIndex};
use cellsim_store::GridModel;

use crate::metrics::StepTimingStatistics;

/// Something that advances a grid model by one logical step.
///
/// Implemented by [`SyncStepper`](crate::SyncStepper) and
/// [`AsyncStepper`](crate::AsyncStepper); the
/// [`Executor`](crate::Executor) is written against this trait only.
pub trait StepRunner {
    /// The storage being advanced.
    type Model: GridModel;

    /// Name of the bound step logic, for logs and errors.
    fn name(&self) -> &str;

    /// The published model.
    fn model(&self) -> &Self::Model;

    /// Mutable access to the published model between steps.
    fn model_mut(&mut self) -> &mut Self::Model;

    /// Compute step `index`.
    ///
    /// On error the published model is either untouched (synchronous
    /// stepping) or holds the mutations made before the failure
    /// (asynchronous stepping).
    fn step(&mut self, index: StepIndex) -> Result<(), StepError>;
}

/// Decorator recording the wall-clock duration of every successful step.
#[derive(Debug)]
pub struct TimedRunner<R> {
    inner: R,
    stats: StepTimingStatistics,
}

impl<R: StepRunner> TimedRunner<R> {
    /// Wrap `inner` with empty statistics.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            stats: StepTimingStatistics::new(),
        }
    }

    /// Statistics gathered so far.
    pub fn statistics(&self) -> &StepTimingStatistics {
        &self.stats
    }

    /// Forget gathered statistics.
    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }

    /// The wrapped runner.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// The wrapped runner, mutably.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap, discarding statistics.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: StepRunner> StepRunner for TimedRunner<R> {
    type Model = R::Model;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model(&self) -> &Self::Model {
        self.inner.model()
    }

    fn model_mut(&mut self) -> &mut Self::Model {
        self.inner.model_mut()
    }

    fn step(&mut self, index: StepIndex) -> Result<(), StepError> {
        let start = Instant::now();
        self.inner.step(index)?;
        self.stats.record(start.elapsed());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsim_core::RuleError;
    use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};
    use cellsim_store::DenseGrid;

    struct Counter {
        model: DenseGrid<u8>,
        fail_at: u64,
    }

    impl StepRunner for Counter {
        type Model = DenseGrid<u8>;

        fn name(&self) -> &str {
            "counter"
        }

        fn model(&self) -> &DenseGrid<u8> {
            &self.model
        }

        fn model_mut(&mut self) -> &mut DenseGrid<u8> {
            &mut self.model
        }

        fn step(&mut self, index: StepIndex) -> Result<(), StepError> {
            if index.0 == self.fail_at {
                return Err(StepError::RuleFailed {
                    name: "counter".into(),
                    reason: RuleError::failed("planned"),
                });
            }
            Ok(())
        }
    }

    fn counter(fail_at: u64) -> TimedRunner<Counter> {
        let s = GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, 2, 2).unwrap();
        TimedRunner::new(Counter {
            model: DenseGrid::new(s, 0),
            fail_at,
        })
    }

    #[test]
    fn records_successful_steps_only() {
        let mut r = counter(2);
        r.step(StepIndex(1)).unwrap();
        assert!(r.step(StepIndex(2)).is_err());
        r.step(StepIndex(3)).unwrap();
        assert_eq!(r.statistics().count(), 2);
        assert!(r.statistics().last().is_some());
    }

    #[test]
    fn reset_and_unwrap() {
        let mut r = counter(99);
        r.step(StepIndex(1)).unwrap();
        r.reset_statistics();
        assert_eq!(r.statistics().count(), 0);
        assert_eq!(r.name(), "counter");
        assert_eq!(r.into_inner().fail_at, 99);
    }
}
