// ============================================================================
// Marketplace Money Library
// Currency-safe exact decimal money and streaming statistics
// ============================================================================

//! # Marketplace Money
//!
//! Numeric core of a marketplace API client. Settlement, report and order
//! records carry their monetary fields as [`Money`](money::Money); report
//! columns are summarized with [`StatsAccumulator`](statistics::StatsAccumulator).
//!
//! ## Features
//!
//! - **Exact decimal amounts** backed by `rust_decimal`, never floats
//! - **Scale discipline**: every amount carries its currency's fraction digits
//! - **Currency safety**: mixing currencies is an error, not a wrong total
//! - **Explicit rounding**: one rounding mode per value, half-up by default
//! - **Single-pass statistics** with Welford's algorithm
//!
//! ## Example
//!
//! ```rust
//! use marketplace_money::prelude::*;
//!
//! let item = Money::parse("19.99", Currency::Usd)?;
//! let shipping = Money::parse("4.50", Currency::Usd)?;
//!
//! let total = item.times(3)?.plus(&shipping)?;
//! assert_eq!(total.to_string(), "64.47");
//! assert_eq!(total.to_currency_string(), "$64.47");
//!
//! // Mixing currencies fails loudly
//! let fee = Money::parse("1.00", Currency::Eur)?;
//! assert!(matches!(
//!     total.plus(&fee),
//!     Err(MoneyError::CurrencyMismatch { .. })
//! ));
//!
//! let mut stats = StatsAccumulator::new();
//! stats.calculate([19.99, 24.50, 5.00]);
//! println!("mean order value: {:.2}", stats.mean());
//! # Ok::<(), MoneyError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize `Money` as `{"amount": "19.99", "currency": "USD", ...}`
//! - `logging`: `utils::logging::init` installs a `tracing-subscriber` formatter

pub mod config;
pub mod money;
pub mod numeric;
pub mod statistics;

#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::MoneyConfig;
    pub use crate::money::{Currency, Locale, Money, Scalar};
    pub use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
    pub use crate::statistics::{SharedStatsAccumulator, StatsAccumulator};
}
