// ============================================================================
// Currency
// ISO 4217 codes used by marketplace settlement and report records
// ============================================================================

use crate::numeric::MoneyError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ISO 4217 currency with its canonical number of fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    #[default]
    Usd,
    Cad,
    Mxn,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Brl,
    Cny,
    Inr,
    Chf,
    Sek,
    Krw,
    Clp,
    Kwd,
    Bhd,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 16] = [
        Currency::Usd,
        Currency::Cad,
        Currency::Mxn,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Brl,
        Currency::Cny,
        Currency::Inr,
        Currency::Chf,
        Currency::Sek,
        Currency::Krw,
        Currency::Clp,
        Currency::Kwd,
        Currency::Bhd,
    ];

    /// Three-letter ISO 4217 code.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Mxn => "MXN",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Brl => "BRL",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Chf => "CHF",
            Currency::Sek => "SEK",
            Currency::Krw => "KRW",
            Currency::Clp => "CLP",
            Currency::Kwd => "KWD",
            Currency::Bhd => "BHD",
        }
    }

    /// Number of fractional digits every amount in this currency carries.
    pub const fn default_fraction_digits(self) -> u32 {
        match self {
            Currency::Jpy | Currency::Krw | Currency::Clp => 0,
            Currency::Kwd | Currency::Bhd => 3,
            _ => 2,
        }
    }

    /// Symbol used by locales whose home currency this is.
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad | Currency::Mxn | Currency::Aud => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Brl => "R$",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            _ => self.code(),
        }
    }

    /// Symbol used when formatting outside the currency's home locale.
    ///
    /// Dollar and yen currencies are disambiguated with a country prefix.
    pub const fn international_symbol(self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Cad => "CA$",
            Currency::Mxn => "MX$",
            Currency::Aud => "A$",
            Currency::Cny => "CN¥",
            _ => self.symbol(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    /// Parse a case-insensitive ISO 4217 code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::InvalidAmount(format!("unknown currency code '{}'", s)))
    }
}
