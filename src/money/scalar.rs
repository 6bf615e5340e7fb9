// ============================================================================
// Dimensionless Scalars
// Plain numbers accepted by Money::times and Money::div
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// A unitless number that can scale a monetary amount.
pub trait Scalar {
    /// Convert to an exact decimal.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for values with no decimal representation
    /// (NaN, infinities, out-of-range floats).
    fn to_decimal(self) -> MoneyResult<Decimal>;
}

impl Scalar for Decimal {
    #[inline]
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn to_decimal(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_integer_scalar!(i32, i64, u32, u64);

impl Scalar for f64 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(format!(
                "{} is not a finite number",
                self
            )));
        }
        Decimal::from_f64(self)
            .ok_or_else(|| MoneyError::InvalidAmount(format!("{} is out of decimal range", self)))
    }
}
