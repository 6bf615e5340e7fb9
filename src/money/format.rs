// ============================================================================
// Locale Formatting
// Currency and percent rendering for display surfaces
// ============================================================================

use super::locale::{SymbolPosition, NBSP};
use super::{Currency, Locale};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

/// Render `|value|` with the locale's grouping and decimal separators.
fn render_number(value: Decimal, locale: Locale) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut rendered = locale.group_digits(int_part);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator());
        rendered.push_str(frac);
    }
    rendered
}

fn sign(value: Decimal) -> &'static str {
    if value < Decimal::ZERO {
        "-"
    } else {
        ""
    }
}

/// Format an already-scaled amount as a currency string, e.g. `$1,234.56`
/// or `1.234,56 €`.
pub(crate) fn currency_string(amount: Decimal, currency: Currency, locale: Locale) -> String {
    let number = render_number(amount, locale);
    let symbol = locale.currency_symbol(currency);
    let sign = sign(amount);

    match locale.symbol_position() {
        SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, number),
        SymbolPosition::PrefixSpaced => format!("{}{}{}{}", sign, symbol, NBSP, number),
        SymbolPosition::SuffixSpaced => format!("{}{}{}{}", sign, number, NBSP, symbol),
    }
}

/// Format a ratio as a whole percentage, e.g. `0.255` -> `26%`.
pub(crate) fn percent_string(
    ratio: Decimal,
    locale: Locale,
    rounding_mode: RoundingMode,
) -> MoneyResult<String> {
    let scaled = ratio
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow)?;
    let whole = rounding_mode.rescale(scaled, 0)?;

    let number = render_number(whole, locale);
    let sign = sign(whole);
    if locale.spaced_percent() {
        Ok(format!("{}{}{}%", sign, number, NBSP))
    } else {
        Ok(format!("{}{}%", sign, number))
    }
}
