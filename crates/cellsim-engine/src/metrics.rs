//! Wall-clock timing of executed steps.
//!
//! [`StepTimingStatistics`] is maintained by
//! [`TimedRunner`](crate::TimedRunner) and is independent of any
//! domain-level statistics. Presentation layers read it to throttle
//! redraws; termination conditions receive it as an argument.

use std::time::Duration;

/// Running min/max/average of step durations.
///
/// Only successful steps are recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepTimingStatistics {
    count: u64,
    total: Duration,
    min: Option<Duration>,
    max: Option<Duration>,
    last: Option<Duration>,
}

impl StepTimingStatistics {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step duration into the statistics.
    pub fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total = self.total.saturating_add(elapsed);
        self.min = Some(self.min.map_or(elapsed, |m| m.min(elapsed)));
        self.max = Some(self.max.map_or(elapsed, |m| m.max(elapsed)));
        self.last = Some(elapsed);
    }

    /// Number of recorded steps.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of recorded durations.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Shortest recorded step.
    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    /// Longest recorded step.
    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    /// Mean step duration.
    pub fn average(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        // Duration / u32 only; go through nanoseconds for large counts.
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    /// Duration of the most recent step.
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_has_no_figures() {
        let s = StepTimingStatistics::new();
        assert_eq!(s.count(), 0);
        assert_eq!(s.min(), None);
        assert_eq!(s.max(), None);
        assert_eq!(s.average(), None);
        assert_eq!(s.last(), None);
        assert_eq!(s.total(), Duration::ZERO);
    }

    #[test]
    fn min_max_avg_last() {
        let mut s = StepTimingStatistics::new();
        for d in [ms(4), ms(1), ms(7)] {
            s.record(d);
        }
        assert_eq!(s.count(), 3);
        assert_eq!(s.min(), Some(ms(1)));
        assert_eq!(s.max(), Some(ms(7)));
        assert_eq!(s.average(), Some(ms(4)));
        assert_eq!(s.last(), Some(ms(7)));
        assert_eq!(s.total(), ms(12));
    }

    #[test]
    fn reset_clears() {
        let mut s = StepTimingStatistics::new();
        s.record(ms(3));
        s.reset();
        assert_eq!(s, StepTimingStatistics::default());
    }
}
