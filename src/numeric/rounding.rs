// ============================================================================
// Rounding Policy
// Deterministic rescaling of decimal amounts
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied whenever an amount is rescaled.
///
/// The discriminants are stable ordinals and take part in the total order
/// of [`Money`](crate::money::Money).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Away from zero
    Up = 0,
    /// Toward zero (truncate)
    Down = 1,
    /// Toward positive infinity
    Ceiling = 2,
    /// Toward negative infinity
    Floor = 3,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp = 4,
    /// Nearest neighbour, ties toward zero
    HalfDown = 5,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven = 6,
    /// Rescaling must be exact; any discarded digit is an error
    Unnecessary = 7,
}

impl RoundingMode {
    /// Stable ordinal of this mode.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            // Unnecessary never rounds; the value is only compared
            RoundingMode::HalfEven | RoundingMode::Unnecessary => {
                RoundingStrategy::MidpointNearestEven
            },
        }
    }

    /// Round `value` to at most `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `InvalidAmount` under [`RoundingMode::Unnecessary`] when
    /// digits would be discarded.
    pub fn round(self, value: Decimal, scale: u32) -> MoneyResult<Decimal> {
        let rounded = value.round_dp_with_strategy(scale, self.strategy());
        if self == RoundingMode::Unnecessary && rounded != value {
            return Err(MoneyError::InvalidAmount(format!(
                "{} has more than {} fractional digits",
                value, scale
            )));
        }
        Ok(rounded)
    }

    /// Rescale `value` to exactly `scale` fractional digits.
    ///
    /// Extra digits are rounded away with this mode, missing digits are
    /// padded with zeros. Negative zero is normalized to zero.
    pub fn rescale(self, value: Decimal, scale: u32) -> MoneyResult<Decimal> {
        let mut scaled = self.round(value, scale)?;
        scaled.rescale(scale);
        if scaled.scale() != scale {
            return Err(MoneyError::Overflow);
        }
        if scaled.is_zero() {
            scaled.set_sign_positive(true);
        }
        Ok(scaled)
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = MoneyError;

    /// Parse `HALF_UP`, `half-up` or `HalfUp` style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            "ceiling" => Ok(RoundingMode::Ceiling),
            "floor" => Ok(RoundingMode::Floor),
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            "halfeven" => Ok(RoundingMode::HalfEven),
            "unnecessary" => Ok(RoundingMode::Unnecessary),
            _ => Err(MoneyError::InvalidAmount(format!(
                "unknown rounding mode '{}'",
                s
            ))),
        }
    }
}
