// ============================================================================
// Statistics Module
// Single-pass summaries over numeric report columns
// ============================================================================

mod accumulator;
mod shared;

pub use accumulator::StatsAccumulator;
pub use shared::SharedStatsAccumulator;
