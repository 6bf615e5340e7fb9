// ============================================================================
// Streaming Statistics Accumulator
// Single-pass mean / variance / standard deviation (Welford)
// ============================================================================

/// Running mean and sample variance over a stream of `f64` samples.
///
/// Each sample is observed once and never stored. Uses Welford's online
/// update, which avoids the cancellation of the naive sum-of-squares form.
/// `calculate` continues from the current state; only `clear` resets it.
///
/// # Example
/// ```
/// use marketplace_money::statistics::StatsAccumulator;
///
/// let mut stats = StatsAccumulator::new();
/// stats.calculate([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
///
/// assert_eq!(stats.size(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsAccumulator {
    /// Number of samples seen since the last clear
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the mean (M2)
    m2: f64,
}

impl StatsAccumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Fold one sample into the running state.
    ///
    /// NaN samples are ignored so one bad value cannot poison the mean.
    pub fn push(&mut self, value: f64) {
        if value.is_nan() {
            tracing::trace!("ignoring NaN sample");
            return;
        }

        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Fold a sequence of samples, continuing from the current state.
    pub fn calculate<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.push(value);
        }
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.count, "clearing statistics accumulator");
        *self = Self::new();
    }

    /// Combine another accumulator's samples into this one.
    ///
    /// Uses Chan et al.'s pairwise update, so merging two partial
    /// accumulators matches feeding both batches to one.
    pub fn merge(&mut self, other: &StatsAccumulator) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let weight = other.count as f64 / count as f64;

        self.mean += delta * weight;
        self.m2 += other.m2 + delta * delta * self.count as f64 * weight;
        self.count = count;
        tracing::debug!(count, "merged statistics accumulators");
    }

    /// Number of samples seen.
    #[inline]
    pub fn size(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, 0 when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (N - 1 denominator), 0 for fewer than two samples.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation.
    pub fn stdev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Extend<f64> for StatsAccumulator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.calculate(iter);
    }
}

impl FromIterator<f64> for StatsAccumulator {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.calculate(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_known_dataset() {
        let mut stats = StatsAccumulator::new();
        stats.calculate([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(stats.size(), 8);
        assert_close(stats.mean(), 5.0);
        assert_close(stats.variance(), 4.571428571428571);
        assert_close(stats.stdev(), 4.571428571428571f64.sqrt());
    }

    #[test]
    fn test_empty_and_single() {
        let mut stats = StatsAccumulator::new();
        assert!(stats.is_empty());
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.stdev(), 0.0);

        stats.push(42.0);
        assert_eq!(stats.size(), 1);
        assert_close(stats.mean(), 42.0);
        assert_eq!(stats.variance(), 0.0);
    }

    #[test]
    fn test_calculate_accumulates() {
        let mut stats = StatsAccumulator::new();
        stats.calculate([1.0, 2.0, 3.0]);
        stats.calculate([4.0, 5.0]);

        assert_eq!(stats.size(), 5);
        assert_close(stats.mean(), 3.0);
        assert_close(stats.variance(), 2.5);
    }

    #[test]
    fn test_clear() {
        let mut stats: StatsAccumulator = [1.0, 2.0, 3.0].into_iter().collect();
        stats.clear();

        assert_eq!(stats.size(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats, StatsAccumulator::new());
    }

    #[test]
    fn test_nan_ignored() {
        let mut stats = StatsAccumulator::new();
        stats.calculate([1.0, f64::NAN, 3.0]);
        assert_eq!(stats.size(), 2);
        assert_close(stats.mean(), 2.0);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let mut left: StatsAccumulator = [2.0, 4.0, 4.0, 4.0].into_iter().collect();
        let right: StatsAccumulator = [5.0, 5.0, 7.0, 9.0].into_iter().collect();
        left.merge(&right);

        assert_eq!(left.size(), 8);
        assert_close(left.mean(), 5.0);
        assert_close(left.variance(), 32.0 / 7.0);
    }

    #[test]
    fn test_merge_with_empty() {
        let mut stats: StatsAccumulator = [1.0, 3.0].into_iter().collect();
        let before = stats;
        stats.merge(&StatsAccumulator::new());
        assert_eq!(stats, before);

        let mut empty = StatsAccumulator::new();
        empty.merge(&before);
        assert_eq!(empty, before);
    }

    #[test]
    fn test_stable_with_large_offset() {
        // Naive sum-of-squares loses everything at this magnitude
        let offset = 1e9;
        let mut stats = StatsAccumulator::new();
        stats.calculate([offset + 4.0, offset + 7.0, offset + 13.0, offset + 16.0]);
        assert!((stats.variance() - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_extend() {
        let mut stats = StatsAccumulator::new();
        stats.extend(vec![10.0, 20.0]);
        assert_close(stats.mean(), 15.0);
    }
}
