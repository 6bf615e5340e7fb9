// ============================================================================
// Money Configuration
// Default currency, locale and rounding policy for a marketplace client
// ============================================================================

use crate::money::{Currency, Locale, Money, Scalar};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const ENV_CURRENCY: &str = "MONEY_CURRENCY";
pub const ENV_LOCALE: &str = "MONEY_LOCALE";
pub const ENV_ROUNDING_MODE: &str = "MONEY_ROUNDING_MODE";

/// Defaults applied when building [`Money`] values from wire data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyConfig {
    /// Currency assumed for amounts that arrive without one
    pub currency: Currency,

    /// Locale used by `to_currency_string` / `to_percent_string`
    pub locale: Locale,

    /// Rounding applied at construction and after every operation
    pub rounding_mode: RoundingMode,
}

impl MoneyConfig {
    pub fn new(currency: Currency, locale: Locale, rounding_mode: RoundingMode) -> Self {
        Self {
            currency,
            locale,
            rounding_mode,
        }
    }

    /// Builder method: Set currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder method: Set locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> MoneyResult<Self> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Read the configuration from a variable map; unset keys keep their defaults.
    ///
    /// # Errors
    /// - `InvalidAmount` for an unknown currency code or rounding mode
    /// - `InvalidLocale` for an unsupported locale tag
    pub fn from_env_map(env_map: HashMap<String, String>) -> MoneyResult<Self> {
        let mut config = Self::default();

        if let Some(code) = env_map.get(ENV_CURRENCY) {
            config.currency = code.parse()?;
        }
        if let Some(tag) = env_map.get(ENV_LOCALE) {
            config.locale = tag.parse()?;
        }
        if let Some(mode) = env_map.get(ENV_ROUNDING_MODE) {
            config.rounding_mode = mode.parse()?;
        }

        tracing::debug!(
            currency = config.currency.code(),
            locale = %config.locale,
            rounding_mode = ?config.rounding_mode,
            "loaded money configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidLocale` if the locale does not settle in the currency.
    pub fn validate(&self) -> MoneyResult<()> {
        self.locale.ensure_supports(self.currency)
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// Build a value in the configured currency.
    pub fn money<S: Scalar>(&self, amount: S) -> MoneyResult<Money> {
        Money::new(
            amount.to_decimal()?,
            self.currency,
            self.locale,
            self.rounding_mode,
        )
    }

    /// Parse a wire amount such as `"19.99"` in the configured currency.
    pub fn parse(&self, amount: &str) -> MoneyResult<Money> {
        let decimal: Decimal = amount.trim().parse().map_err(|_| {
            MoneyError::InvalidAmount(format!("'{}' is not a decimal number", amount))
        })?;
        self.money(decimal)
    }

    /// Zero in the configured currency.
    pub fn zero(&self) -> Money {
        Money::zero(self.currency)
            .with_locale(self.locale)
            .with_rounding_mode(self.rounding_mode)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// US marketplace: USD, en-US, half-up
    pub fn us_marketplace() -> Self {
        Self::default()
    }

    /// Canadian marketplace: CAD, en-CA or fr-CA, half-up
    pub fn canada_marketplace(french: bool) -> Self {
        let locale = if french { Locale::FrCa } else { Locale::EnCa };
        Self::new(Currency::Cad, locale, RoundingMode::HalfUp)
    }

    /// Mexican marketplace: MXN, es-MX, half-up
    pub fn mexico_marketplace() -> Self {
        Self::new(Currency::Mxn, Locale::EsMx, RoundingMode::HalfUp)
    }
}
