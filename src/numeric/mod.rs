// ============================================================================
// Numeric Module
// Error handling and rounding policy shared by monetary arithmetic
// ============================================================================
//
// This module provides:
// - MoneyError: Error types for money construction and arithmetic
// - RoundingMode: Rescaling policy applied at every construction
//
// Design principles:
// - No floating-point operations on amounts
// - All arithmetic returns Result (no panics)
// - Scale is always explicit and owned by the currency

mod errors;
mod rounding;

pub use errors::{MoneyError, MoneyResult};
pub use rounding::RoundingMode;
