// ============================================================================
// Locale
// Display conventions for the marketplaces the API serves
// ============================================================================

use super::Currency;
use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `R$ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

/// Language + region pair. Only affects formatting, never arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Locale {
    #[default]
    EnUs,
    EnCa,
    FrCa,
    EsMx,
    EnGb,
    DeDe,
    FrFr,
    EsEs,
    ItIt,
    JaJp,
    PtBr,
    ZhCn,
    EnAu,
}

pub(crate) const NBSP: char = '\u{a0}';

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 13] = [
        Locale::EnUs,
        Locale::EnCa,
        Locale::FrCa,
        Locale::EsMx,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::EsEs,
        Locale::ItIt,
        Locale::JaJp,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::EnAu,
    ];

    /// ISO 639 language code.
    pub const fn language(self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnCa | Locale::EnGb | Locale::EnAu => "en",
            Locale::FrCa | Locale::FrFr => "fr",
            Locale::EsMx | Locale::EsEs => "es",
            Locale::DeDe => "de",
            Locale::ItIt => "it",
            Locale::JaJp => "ja",
            Locale::PtBr => "pt",
            Locale::ZhCn => "zh",
        }
    }

    /// ISO 3166 region code.
    pub const fn region(self) -> &'static str {
        match self {
            Locale::EnUs => "US",
            Locale::EnCa | Locale::FrCa => "CA",
            Locale::EsMx => "MX",
            Locale::EnGb => "GB",
            Locale::DeDe => "DE",
            Locale::FrFr => "FR",
            Locale::EsEs => "ES",
            Locale::ItIt => "IT",
            Locale::JaJp => "JP",
            Locale::PtBr => "BR",
            Locale::ZhCn => "CN",
            Locale::EnAu => "AU",
        }
    }

    /// Currency of the locale's region.
    pub const fn home_currency(self) -> Currency {
        match self {
            Locale::EnUs => Currency::Usd,
            Locale::EnCa | Locale::FrCa => Currency::Cad,
            Locale::EsMx => Currency::Mxn,
            Locale::EnGb => Currency::Gbp,
            Locale::DeDe | Locale::FrFr | Locale::EsEs | Locale::ItIt => Currency::Eur,
            Locale::JaJp => Currency::Jpy,
            Locale::PtBr => Currency::Brl,
            Locale::ZhCn => Currency::Cny,
            Locale::EnAu => Currency::Aud,
        }
    }

    pub const fn decimal_separator(self) -> char {
        match self {
            Locale::FrCa
            | Locale::DeDe
            | Locale::FrFr
            | Locale::EsEs
            | Locale::ItIt
            | Locale::PtBr => ',',
            _ => '.',
        }
    }

    pub const fn grouping_separator(self) -> char {
        match self {
            Locale::FrCa | Locale::FrFr => NBSP,
            Locale::DeDe | Locale::EsEs | Locale::ItIt | Locale::PtBr => '.',
            _ => ',',
        }
    }

    pub const fn symbol_position(self) -> SymbolPosition {
        match self {
            Locale::FrCa | Locale::DeDe | Locale::FrFr | Locale::EsEs | Locale::ItIt => {
                SymbolPosition::SuffixSpaced
            },
            Locale::PtBr => SymbolPosition::PrefixSpaced,
            _ => SymbolPosition::Prefix,
        }
    }

    /// Whether the percent sign is separated from the number (`25 %`).
    pub const fn spaced_percent(self) -> bool {
        matches!(
            self,
            Locale::FrCa | Locale::DeDe | Locale::FrFr | Locale::EsEs
        )
    }

    /// Symbol to render for `currency` in this locale.
    pub fn currency_symbol(self, currency: Currency) -> &'static str {
        if currency == self.home_currency() {
            currency.symbol()
        } else {
            currency.international_symbol()
        }
    }

    /// Currencies this locale's marketplace settles in.
    ///
    /// North American marketplaces also settle cross-border sales in USD.
    pub fn supports(self, currency: Currency) -> bool {
        currency == self.home_currency()
            || (matches!(self, Locale::EnCa | Locale::FrCa | Locale::EsMx)
                && currency == Currency::Usd)
    }

    /// Validate a locale/currency combination.
    ///
    /// # Errors
    /// Returns `InvalidLocale` if the locale's marketplace does not settle
    /// in `currency`.
    pub fn ensure_supports(self, currency: Currency) -> MoneyResult<()> {
        if self.supports(currency) {
            Ok(())
        } else {
            Err(MoneyError::InvalidLocale(format!(
                "{} does not support {}",
                self,
                currency.code()
            )))
        }
    }

    /// Insert grouping separators into a run of ASCII integer digits.
    pub(crate) fn group_digits(self, digits: &str) -> String {
        let separator = self.grouping_separator();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language(), self.region())
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    /// Parse a tag such as `en-US` or `en_US` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        let (language, region) = tag
            .split_once(['-', '_'])
            .ok_or_else(|| MoneyError::InvalidLocale(format!("malformed locale tag '{}'", s)))?;

        Locale::ALL
            .iter()
            .copied()
            .find(|locale| {
                locale.language().eq_ignore_ascii_case(language)
                    && locale.region().eq_ignore_ascii_case(region)
            })
            .ok_or_else(|| MoneyError::InvalidLocale(format!("unsupported locale '{}'", s)))
    }
}

impl TryFrom<String> for Locale {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
