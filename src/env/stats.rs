//! Episode statistics counters.

use std::fmt;

/// Running scalar accumulator: count, sum, and average of fed values.
#[derive(Debug, Clone, Default)]
pub struct StatCounter {
    count: u64,
    sum: f64,
}

impl StatCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one value.
    pub fn feed(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    /// Clears the counter.
    pub fn reset(&mut self) {
        self.count = 0;
        self.sum = 0.0;
    }

    /// Number of values fed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of values fed.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Mean of values fed, or 0 when empty.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Per-environment episode statistics, accumulated across episodes until
/// explicitly reset.
#[derive(Debug, Clone, Default)]
pub struct EnvStats {
    /// Episodes started.
    pub num_episodes: StatCounter,
    /// Episodes ending with the agent within one unit of the target.
    pub num_success: StatCounter,
}

impl EnvStats {
    /// Zeroes all counters.
    pub fn reset(&mut self) {
        self.num_episodes.reset();
        self.num_success.reset();
    }

    /// Fraction of started episodes that ended in success.
    pub fn success_rate(&self) -> f64 {
        if self.num_episodes.count() == 0 {
            0.0
        } else {
            self.num_success.count() as f64 / self.num_episodes.count() as f64
        }
    }
}

impl fmt::Display for EnvStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes: {}, successes: {} ({:.1}%)",
            self.num_episodes.count(),
            self.num_success.count(),
            self.success_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_count_and_sum() {
        let mut counter = StatCounter::new();
        counter.feed(1.0);
        counter.feed(2.5);
        counter.feed(-0.5);
        assert_eq!(counter.count(), 3);
        assert!((counter.sum() - 3.0).abs() < 1e-12);
        assert!((counter.average() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_counter_average_is_zero() {
        let counter = StatCounter::new();
        assert_eq!(counter.average(), 0.0);
    }

    #[test]
    fn reset_clears_counter() {
        let mut counter = StatCounter::new();
        counter.feed(4.0);
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.sum(), 0.0);
    }

    #[test]
    fn success_rate() {
        let mut stats = EnvStats::default();
        for _ in 0..4 {
            stats.num_episodes.feed(1.0);
        }
        stats.num_success.feed(1.0);
        assert!((stats.success_rate() - 0.25).abs() < 1e-12);
        stats.reset();
        assert_eq!(stats.success_rate(), 0.0);
    }
}
