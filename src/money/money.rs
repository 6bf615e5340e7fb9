// ============================================================================
// Money
// Immutable, currency-tagged exact decimal amount
// ============================================================================

use super::format;
use super::{Currency, Locale, Scalar};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary amount in a single currency.
///
/// The amount always carries exactly `currency.default_fraction_digits()`
/// fractional digits; construction rescales with the instance's
/// [`RoundingMode`]. Binary operations between two `Money` values require
/// the same currency and fail with [`MoneyError::CurrencyMismatch`]
/// otherwise. Scaling by a plain number never checks currency.
///
/// # Example
/// ```
/// use marketplace_money::money::{Currency, Money};
///
/// let price = Money::parse("19.99", Currency::Usd)?;
/// let total = price.times(3)?;
/// assert_eq!(total.to_string(), "59.97");
///
/// let refund = Money::parse("5.00", Currency::Usd)?;
/// assert_eq!(total.minus(&refund)?.to_string(), "54.97");
/// # Ok::<(), marketplace_money::numeric::MoneyError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MoneyRepr", into = "MoneyRepr"))]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    locale: Locale,
    rounding_mode: RoundingMode,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a money value, rescaling `amount` to the currency's fraction
    /// digits with `rounding_mode`.
    ///
    /// # Errors
    /// - `InvalidAmount` if `rounding_mode` is `Unnecessary` and digits would be lost
    /// - `Overflow` if the rescaled amount does not fit
    pub fn new(
        amount: Decimal,
        currency: Currency,
        locale: Locale,
        rounding_mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let amount = rounding_mode.rescale(amount, currency.default_fraction_digits())?;
        Ok(Self {
            amount,
            currency,
            locale,
            rounding_mode,
        })
    }

    /// Create from a decimal with the default locale and rounding mode.
    pub fn from_decimal(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        Self::new(amount, currency, Locale::default(), RoundingMode::default())
    }

    /// Create from an amount that must already fit the currency's scale.
    ///
    /// Fewer fractional digits are padded; more are rejected instead of rounded.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `amount` has more fractional digits than
    /// the currency allows.
    pub fn from_scaled(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        let digits = currency.default_fraction_digits();
        if amount.scale() > digits {
            return Err(MoneyError::InvalidAmount(format!(
                "{} has {} fractional digits, {} allows {}",
                amount,
                amount.scale(),
                currency.code(),
                digits
            )));
        }
        Self::from_decimal(amount, currency)
    }

    /// Parse a decimal string such as `"19.99"` (the API wire format).
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `s` is not a decimal number.
    pub fn parse(s: &str, currency: Currency) -> MoneyResult<Self> {
        let amount: Decimal = s
            .trim()
            .parse()
            .map_err(|_| MoneyError::InvalidAmount(format!("'{}' is not a decimal number", s)))?;
        Self::from_decimal(amount, currency)
    }

    /// Create from a whole number of currency units.
    pub fn from_i64(amount: i64, currency: Currency) -> MoneyResult<Self> {
        Self::from_decimal(Decimal::from(amount), currency)
    }

    /// Create from a float, rounded to the currency's scale.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN, infinities or out-of-range values.
    pub fn from_f64(amount: f64, currency: Currency) -> MoneyResult<Self> {
        Self::from_decimal(amount.to_decimal()?, currency)
    }

    /// Create from an integer count of minor units (cents, fils, yen).
    ///
    /// Inverse of [`Money::as_db_integer`].
    pub fn from_minor_units(units: i64, currency: Currency) -> MoneyResult<Self> {
        let amount = Decimal::try_new(units, currency.default_fraction_digits())
            .map_err(|_| MoneyError::Overflow)?;
        Self::from_decimal(amount, currency)
    }

    /// Zero in `currency`.
    pub fn zero(currency: Currency) -> Self {
        let mut amount = Decimal::ZERO;
        amount.rescale(currency.default_fraction_digits());
        Self {
            amount,
            currency,
            locale: Locale::default(),
            rounding_mode: RoundingMode::default(),
        }
    }

    /// Same amount, formatted for another locale.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Same amount, rescaling future results with another rounding mode.
    pub fn with_rounding_mode(self, rounding_mode: RoundingMode) -> Self {
        Self {
            rounding_mode,
            ..self
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Number of fractional digits the amount carries.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.amount.scale()
    }

    /// Check the locale/currency combination.
    ///
    /// # Errors
    /// Returns `InvalidLocale` when the locale does not settle in this currency.
    pub fn validate_locale(&self) -> MoneyResult<()> {
        self.locale.ensure_supports(self.currency)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// New value in this currency, locale and rounding mode.
    fn derive(&self, amount: Decimal) -> MoneyResult<Self> {
        Self::new(amount, self.currency, self.locale, self.rounding_mode)
    }

    fn ensure_same_currency(&self, other: &Money, operation: &'static str) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            tracing::warn!(
                operation,
                expected = self.currency.code(),
                found = other.currency.code(),
                "rejected money operation across currencies"
            );
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }

    /// Currency-checked addition.
    pub fn plus(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "plus")?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        self.derive(sum)
    }

    /// Currency-checked subtraction.
    pub fn minus(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "minus")?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        self.derive(difference)
    }

    /// Scale by a dimensionless factor.
    pub fn times<S: Scalar>(&self, factor: S) -> MoneyResult<Self> {
        let product = self
            .amount
            .checked_mul(factor.to_decimal()?)
            .ok_or(MoneyError::Overflow)?;
        self.derive(product)
    }

    /// Divide by a dimensionless divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div<S: Scalar>(&self, divisor: S) -> MoneyResult<Self> {
        self.divide_amount(divisor.to_decimal()?)
    }

    /// Currency-checked multiplication of two amounts.
    pub fn times_money(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "times")?;
        let product = self
            .amount
            .checked_mul(other.amount)
            .ok_or(MoneyError::Overflow)?;
        self.derive(product)
    }

    /// Currency-checked division of two amounts.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `DivisionByZero` if `other` is zero
    pub fn div_money(&self, other: &Money) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "div")?;
        self.divide_amount(other.amount)
    }

    fn divide_amount(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero {
                currency: self.currency,
            });
        }
        let quotient = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        self.derive(quotient)
    }

    /// Sum a collection of amounts.
    ///
    /// An empty collection sums to zero in the default currency. Otherwise
    /// the values are folded with [`Money::plus`], so the first value of a
    /// different currency fails the whole sum.
    pub fn sum<I, M>(values: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Money>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Ok(Self::zero(Currency::default()));
        };
        iter.try_fold(*first.borrow(), |total, value| total.plus(value.borrow()))
    }

    /// Integer remainder of the whole-unit part of the amount.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `Overflow` if the whole-unit amount does not fit in `i64`
    pub fn modulo(&self, divisor: i64) -> MoneyResult<i64> {
        if divisor == 0 {
            return Err(MoneyError::DivisionByZero {
                currency: self.currency,
            });
        }
        let whole = self.amount.trunc().to_i64().ok_or(MoneyError::Overflow)?;
        Ok(whole % divisor)
    }

    /// Same amount with the sign flipped.
    pub fn negate(&self) -> Self {
        let mut negated = *self;
        if !negated.amount.is_zero() {
            negated.amount = -negated.amount;
        }
        negated
    }

    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            ..*self
        }
    }

    /// Currency-checked minimum.
    pub fn min(self, other: Money) -> MoneyResult<Self> {
        Ok(if self.less_than_or_equal(&other)? {
            self
        } else {
            other
        })
    }

    /// Currency-checked maximum.
    pub fn max(self, other: Money) -> MoneyResult<Self> {
        Ok(if self.greater_than_or_equal(&other)? {
            self
        } else {
            other
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn compare_checked(&self, other: &Money, operation: &'static str) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other, operation)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_checked(other, "greater_than")?.is_gt())
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_checked(other, "less_than")?.is_lt())
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_checked(other, "greater_than_or_equal")?.is_ge())
    }

    pub fn less_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_checked(other, "less_than_or_equal")?.is_le())
    }

    /// Currency-checked amount equality.
    ///
    /// Unlike `==`, comparing two currencies is an error rather than `false`.
    pub fn equal_to(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare_checked(other, "equal_to")?.is_eq())
    }

    #[inline]
    pub fn greater_than_zero(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    #[inline]
    pub fn less_than_zero(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Same as [`Money::greater_than_zero`].
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.greater_than_zero()
    }

    /// Same as [`Money::less_than_zero`].
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.less_than_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Whole currency units, rounded with the instance's rounding mode.
    pub fn int_value(&self) -> MoneyResult<i64> {
        self.rounding_mode
            .rescale(self.amount, 0)?
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }

    /// Integer count of minor units for storage (cents for USD).
    ///
    /// Scales by `10^decimals`, so zero- and three-digit currencies stay
    /// consistent with [`Money::decimals`].
    pub fn as_db_integer(&self) -> MoneyResult<i64> {
        let mut minor = self.amount;
        minor.set_scale(0).map_err(|_| MoneyError::Overflow)?;
        // set_scale(0) reinterprets the mantissa, which is exactly amount * 10^scale
        minor.to_i64().ok_or(MoneyError::Overflow)
    }

    /// Locale currency format, e.g. `$1,234.56`.
    pub fn to_currency_string(&self) -> String {
        format::currency_string(self.amount, self.currency, self.locale)
    }

    /// Locale percent format of the amount read as a ratio, e.g. `0.25` -> `25%`.
    pub fn to_percent_string(&self) -> MoneyResult<String> {
        format::percent_string(self.amount, self.locale, self.rounding_mode)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    fn default() -> Self {
        Self::zero(Currency::default())
    }
}

/// Structural equality: amount, currency and rounding mode. Never errors,
/// so `Money` works as a map key; use [`Money::equal_to`] for the
/// currency-checked comparison.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.currency == other.currency
            && self.rounding_mode == other.rounding_mode
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
        self.rounding_mode.hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deterministic total order for sorting: amount, then currency code, then
/// rounding-mode ordinal. Not a substitute for the checked comparisons.
impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| self.currency.code().cmp(other.currency.code()))
            .then_with(|| self.rounding_mode.ordinal().cmp(&other.rounding_mode.ordinal()))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money({} {}, {}, {:?})",
            self.amount,
            self.currency.code(),
            self.locale,
            self.rounding_mode
        )
    }
}

/// Plain scaled decimal, the canonical wire form (`"19.99"`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    /// Parse a decimal string as USD.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Currency::default())
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: String,
    currency: Currency,
    #[serde(default)]
    locale: Locale,
    #[serde(default)]
    rounding_mode: RoundingMode,
}

#[cfg(feature = "serde")]
impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.to_string(),
            currency: money.currency,
            locale: money.locale,
            rounding_mode: money.rounding_mode,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        let amount: Decimal = repr.amount.trim().parse().map_err(|_| {
            MoneyError::InvalidAmount(format!("'{}' is not a decimal number", repr.amount))
        })?;
        Money::new(amount, repr.currency, repr.locale, repr.rounding_mode)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn usd(s: &str) -> Money {
        Money::parse(s, Currency::Usd).unwrap()
    }

    fn eur(s: &str) -> Money {
        Money::parse(s, Currency::Eur).unwrap()
    }

    #[test]
    fn test_construction_rescales_to_currency() {
        let m = usd("19.999");
        assert_eq!(m.to_string(), "20.00");
        assert_eq!(m.decimals(), 2);

        let yen = Money::parse("1500.5", Currency::Jpy).unwrap();
        assert_eq!(yen.to_string(), "1501");

        let dinar = Money::parse("1.5", Currency::Kwd).unwrap();
        assert_eq!(dinar.to_string(), "1.500");
    }

    #[test]
    fn test_defaults() {
        let m: Money = "12.5".parse().unwrap();
        assert_eq!(m.currency(), Currency::Usd);
        assert_eq!(m.locale(), Locale::EnUs);
        assert_eq!(m.rounding_mode(), RoundingMode::HalfUp);
        assert_eq!(m.to_string(), "12.50");
        assert_eq!(Money::default().to_string(), "0.00");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Money::parse("abc", Currency::Usd),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::parse("", Currency::Usd),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::from_f64(f64::NAN, Currency::Usd),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_from_scaled_rejects_excess_digits() {
        assert!(matches!(
            Money::from_scaled(dec!(1.005), Currency::Usd),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert_eq!(
            Money::from_scaled(dec!(1.5), Currency::Usd).unwrap().to_string(),
            "1.50"
        );
    }

    #[test]
    fn test_unnecessary_rounding_rejects_excess_digits() {
        let result = Money::new(
            dec!(1.234),
            Currency::Usd,
            Locale::EnUs,
            RoundingMode::Unnecessary,
        );
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_from_numeric_primitives() {
        assert_eq!(Money::from_i64(7, Currency::Usd).unwrap().to_string(), "7.00");
        assert_eq!(
            Money::from_f64(19.99, Currency::Usd).unwrap().to_string(),
            "19.99"
        );
        assert_eq!(
            Money::from_minor_units(1999, Currency::Usd).unwrap().to_string(),
            "19.99"
        );
        assert_eq!(
            Money::from_minor_units(1999, Currency::Kwd).unwrap().to_string(),
            "1.999"
        );
    }

    #[test]
    fn test_plus_minus() {
        let a = usd("10.25");
        let b = usd("0.80");
        assert_eq!(a.plus(&b).unwrap().to_string(), "11.05");
        assert_eq!(a.minus(&b).unwrap().to_string(), "9.45");
        assert_eq!(b.minus(&a).unwrap().to_string(), "-9.45");
    }

    #[test]
    fn test_plus_keeps_receiver_settings() {
        let a = usd("1.00")
            .with_locale(Locale::EnCa)
            .with_rounding_mode(RoundingMode::Floor);
        let b = usd("2.00");
        let sum = a.plus(&b).unwrap();
        assert_eq!(sum.locale(), Locale::EnCa);
        assert_eq!(sum.rounding_mode(), RoundingMode::Floor);
    }

    #[test]
    fn test_currency_mismatch() {
        let a = usd("1.00");
        let b = eur("1.00");
        let expected = MoneyError::CurrencyMismatch {
            expected: Currency::Usd,
            found: Currency::Eur,
        };
        assert_eq!(a.plus(&b), Err(expected.clone()));
        assert_eq!(a.minus(&b), Err(expected.clone()));
        assert_eq!(a.times_money(&b), Err(expected.clone()));
        assert_eq!(a.div_money(&b), Err(expected.clone()));
        assert_eq!(a.greater_than(&b), Err(expected.clone()));
        assert_eq!(a.less_than_or_equal(&b), Err(expected.clone()));
        assert_eq!(a.equal_to(&b), Err(expected));
    }

    #[test]
    fn test_times_scalar() {
        assert_eq!(usd("19.99").times(3).unwrap().to_string(), "59.97");
        assert_eq!(usd("10.00").times(0.075).unwrap().to_string(), "0.75");
        assert_eq!(usd("0.05").times(dec!(0.5)).unwrap().to_string(), "0.03");
    }

    #[test]
    fn test_div_scalar() {
        assert_eq!(usd("10.00").div(3).unwrap().to_string(), "3.33");
        assert_eq!(usd("20.00").div(3).unwrap().to_string(), "6.67");
        assert_eq!(
            usd("10.00").div(0),
            Err(MoneyError::DivisionByZero {
                currency: Currency::Usd
            })
        );
    }

    #[test]
    fn test_money_by_money() {
        assert_eq!(
            usd("2.50").times_money(&usd("4.00")).unwrap().to_string(),
            "10.00"
        );
        assert_eq!(
            usd("10.00").div_money(&usd("4.00")).unwrap().to_string(),
            "2.50"
        );
        assert_eq!(
            usd("10.00").div_money(&usd("0.00")),
            Err(MoneyError::DivisionByZero {
                currency: Currency::Usd
            })
        );
    }

    #[test]
    fn test_sum() {
        let values = vec![usd("1.10"), usd("2.20"), usd("3.30")];
        assert_eq!(Money::sum(&values).unwrap().to_string(), "6.60");

        let empty: Vec<Money> = Vec::new();
        let zero = Money::sum(&empty).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.currency(), Currency::Usd);

        let mixed = vec![usd("1.00"), usd("2.00"), eur("3.00")];
        assert!(matches!(
            Money::sum(mixed),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_sum_of_single_non_default_currency() {
        let values = [eur("4.20")];
        let total = Money::sum(values.iter()).unwrap();
        assert_eq!(total.currency(), Currency::Eur);
        assert_eq!(total.to_string(), "4.20");
    }

    #[test]
    fn test_modulo() {
        assert_eq!(usd("17.99").modulo(5).unwrap(), 2);
        assert_eq!(usd("-17.99").modulo(5).unwrap(), -2);
        assert!(matches!(
            usd("1.00").modulo(0),
            Err(MoneyError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_comparisons() {
        let small = usd("1.00");
        let large = usd("2.00");
        assert!(large.greater_than(&small).unwrap());
        assert!(small.less_than(&large).unwrap());
        assert!(small.less_than_or_equal(&small).unwrap());
        assert!(large.greater_than_or_equal(&large).unwrap());
        assert!(small.equal_to(&usd("1.00")).unwrap());
        assert_eq!(small.min(large).unwrap(), small);
        assert_eq!(small.max(large).unwrap(), large);
        assert!(small.max(eur("5.00")).is_err());
    }

    #[test]
    fn test_sign_tests() {
        assert!(usd("0.01").greater_than_zero());
        assert!(usd("0.01").is_positive());
        assert!(usd("-0.01").less_than_zero());
        assert!(usd("-0.01").is_negative());
        assert!(usd("0.00").is_zero());
        assert!(!usd("0.00").is_positive());
        assert!(!usd("0.00").is_negative());
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!((-usd("3.50")).to_string(), "-3.50");
        assert_eq!(usd("-3.50").abs().to_string(), "3.50");
        assert_eq!(usd("0.00").negate().to_string(), "0.00");
    }

    #[test]
    fn test_int_value_uses_rounding_mode() {
        assert_eq!(usd("2.50").int_value().unwrap(), 3);
        assert_eq!(usd("-2.50").int_value().unwrap(), -3);
        assert_eq!(
            usd("2.50")
                .with_rounding_mode(RoundingMode::HalfEven)
                .int_value()
                .unwrap(),
            2
        );
        assert!(matches!(
            usd("2.50")
                .with_rounding_mode(RoundingMode::Unnecessary)
                .int_value(),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_as_db_integer_follows_currency_digits() {
        assert_eq!(usd("19.99").as_db_integer().unwrap(), 1999);
        assert_eq!(usd("-0.05").as_db_integer().unwrap(), -5);
        assert_eq!(
            Money::parse("1500", Currency::Jpy).unwrap().as_db_integer().unwrap(),
            1500
        );
        assert_eq!(
            Money::parse("1.234", Currency::Kwd).unwrap().as_db_integer().unwrap(),
            1234
        );
    }

    #[test]
    fn test_db_integer_roundtrip() {
        let m = usd("123.45");
        let restored = Money::from_minor_units(m.as_db_integer().unwrap(), Currency::Usd).unwrap();
        assert_eq!(restored, m);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(usd("1234.5").to_currency_string(), "$1,234.50");
        assert_eq!(
            eur("1234.5").with_locale(Locale::DeDe).to_currency_string(),
            "1.234,50\u{a0}€"
        );
        assert_eq!(usd("0.25").to_percent_string().unwrap(), "25%");
    }

    #[test]
    fn test_validate_locale() {
        assert!(usd("1.00").validate_locale().is_ok());
        assert!(matches!(
            eur("1.00").validate_locale(),
            Err(MoneyError::InvalidLocale(_))
        ));
        assert!(eur("1.00").with_locale(Locale::FrFr).validate_locale().is_ok());
    }

    #[test]
    fn test_structural_equality_ignores_locale() {
        let a = usd("5.00");
        let b = usd("5.00").with_locale(Locale::EnCa);
        assert_eq!(a, b);

        let c = usd("5.00").with_rounding_mode(RoundingMode::HalfEven);
        assert_ne!(a, c);

        // Different currencies are simply unequal, never an error
        assert_ne!(a, eur("5.00"));
    }

    #[test]
    fn test_hash_set_membership() {
        let mut set = HashSet::new();
        set.insert(usd("5.00"));
        set.insert(usd("5.00").with_locale(Locale::EnCa));
        set.insert(eur("5.00"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_total_order() {
        let mut values = vec![eur("2.00"), usd("1.00"), usd("2.00"), eur("1.00")];
        values.sort();
        let rendered: Vec<String> = values
            .iter()
            .map(|m| format!("{} {}", m, m.currency()))
            .collect();
        assert_eq!(rendered, vec!["1.00 EUR", "1.00 USD", "2.00 EUR", "2.00 USD"]);

        let half_up = usd("1.00");
        let half_even = usd("1.00").with_rounding_mode(RoundingMode::HalfEven);
        assert_eq!(half_up.cmp(&half_even), Ordering::Less);
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", usd("1.50")), "Money(1.50 USD, en-US, HalfUp)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let m = usd("19.99");
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["amount"], "19.99");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["locale"], "en-US");
        assert_eq!(json["rounding_mode"], "HALF_UP");

        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rescales_and_defaults() {
        let m: Money = serde_json::from_str(r#"{"amount":"3.456","currency":"EUR"}"#).unwrap();
        assert_eq!(m.to_string(), "3.46");
        assert_eq!(m.locale(), Locale::EnUs);

        let bad = serde_json::from_str::<Money>(r#"{"amount":"abc","currency":"USD"}"#);
        assert!(bad.is_err());
    }
}
