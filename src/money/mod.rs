// ============================================================================
// Money Module
// Currency-tagged exact decimal amounts
// ============================================================================
//
// This module provides:
// - Money: Immutable amount + currency + locale + rounding mode
// - Currency: ISO 4217 codes with their canonical scale
// - Locale: Display conventions (never used in arithmetic)
// - Scalar: Unitless numbers accepted by times/div

mod currency;
mod format;
mod locale;
#[allow(clippy::module_inception)]
mod money;
mod scalar;

pub use currency::Currency;
pub use locale::{Locale, SymbolPosition};
pub use money::Money;
pub use scalar::Scalar;
