// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the numeric core
// ============================================================================

pub mod logging;
