// ============================================================================
// Money Errors
// Error types for currency-tagged decimal arithmetic
// ============================================================================

use crate::money::Currency;
use std::fmt;

/// Errors that can occur while constructing or combining [`Money`](crate::money::Money) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Amount or currency could not be parsed, or carries more fractional
    /// digits than the currency allows under a strict constructor
    InvalidAmount(String),
    /// Binary operation between two different currencies
    CurrencyMismatch { expected: Currency, found: Currency },
    /// Attempted division by zero
    DivisionByZero { currency: Currency },
    /// Unsupported locale tag or locale/currency combination
    InvalidLocale(String),
    /// Result exceeded the representable decimal range
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidAmount(reason) => write!(f, "invalid amount: {}", reason),
            MoneyError::CurrencyMismatch { expected, found } => write!(
                f,
                "currency mismatch: expected {}, found {}",
                expected.code(),
                found.code()
            ),
            MoneyError::DivisionByZero { currency } => {
                write!(f, "division by zero ({})", currency.code())
            },
            MoneyError::InvalidLocale(reason) => write!(f, "invalid locale: {}", reason),
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
