// ============================================================================
// Shared Accumulator
// Single-writer wrapper for accumulators fed from several threads
// ============================================================================

use super::StatsAccumulator;
use parking_lot::Mutex;

/// A [`StatsAccumulator`] behind a mutex.
///
/// Each `calculate` call holds the lock for its whole batch, so batches
/// from different threads never interleave sample by sample.
#[derive(Debug, Default)]
pub struct SharedStatsAccumulator {
    inner: Mutex<StatsAccumulator>,
}

impl SharedStatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: f64) {
        self.inner.lock().push(value);
    }

    pub fn calculate<I>(&self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.inner.lock().calculate(values);
    }

    /// Merge a thread-local accumulator in one locked step.
    pub fn merge(&self, other: &StatsAccumulator) {
        self.inner.lock().merge(other);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StatsAccumulator {
        *self.inner.lock()
    }

    pub fn into_inner(self) -> StatsAccumulator {
        self.inner.into_inner()
    }
}

impl From<StatsAccumulator> for SharedStatsAccumulator {
    fn from(stats: StatsAccumulator) -> Self {
        Self {
            inner: Mutex::new(stats),
        }
    }
}
