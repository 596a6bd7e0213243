//! Money helpers
//!
//! Amounts enter the crate as human-readable strings (`"499.00 INR"` in fixtures, `"99.00"` in
//! configuration) and are held as [`Money`] in minor units from then on.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Errors raised while parsing money amounts.
#[derive(Debug, Error, PartialEq)]
pub enum MoneyParseError {
    /// The amount could not be parsed or does not fit in minor units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Negative amounts are not valid prices.
    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    /// The currency code is not a known ISO currency.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Look up an ISO 4217 currency by its alphabetic code.
///
/// # Errors
///
/// Returns [`MoneyParseError::UnknownCurrency`] when the code is not recognised.
pub fn currency(code: &str) -> Result<&'static Currency, MoneyParseError> {
    iso::find(code.trim()).ok_or_else(|| MoneyParseError::UnknownCurrency(code.to_string()))
}

/// Parse a price string (e.g. `"499.00 INR"`) into money.
///
/// # Errors
///
/// Returns an error if the string is not in the format `AMOUNT CURRENCY`, if the amount is not
/// a valid non-negative decimal, or if the currency code is unknown.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, MoneyParseError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoneyParseError::InvalidAmount(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    parse_amount(amount, currency(code)?)
}

/// Parse a bare amount (e.g. `"99.00"`) in major units of `currency`.
///
/// # Errors
///
/// Returns an error if the amount is not a valid non-negative decimal that fits in minor units.
pub fn parse_amount(
    amount: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, MoneyParseError> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| MoneyParseError::InvalidAmount(amount.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyParseError::NegativeAmount(amount.to_string()));
    }

    let minor = minor_units_from_major(value, currency)
        .ok_or_else(|| MoneyParseError::InvalidAmount(amount.to_string()))?;

    Ok(Money::from_minor(minor, currency))
}

/// Convert an amount in major units into minor units of `currency`, rounding half away from
/// zero. Returns `None` on overflow.
pub fn minor_units_from_major(value: Decimal, currency: &Currency) -> Option<i64> {
    let scale = 10_i64.checked_pow(currency.exponent)?;

    value
        .checked_mul(Decimal::from(scale))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Zero in the given currency.
pub fn zero(currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(0, currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{INR, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("499.00 INR")?, Money::from_minor(49_900, INR));
        assert_eq!(parse_price("2.5 USD")?, Money::from_minor(250, USD));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        assert!(matches!(
            parse_price("499.00"),
            Err(MoneyParseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_price_rejects_trailing_tokens() {
        assert!(matches!(
            parse_price("499.00 INR extra"),
            Err(MoneyParseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        assert!(matches!(
            parse_price("1.00 ABC"),
            Err(MoneyParseError::UnknownCurrency(code)) if code == "ABC"
        ));
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        assert!(matches!(
            parse_amount("-1", INR),
            Err(MoneyParseError::NegativeAmount(_))
        ));
    }

    #[test]
    fn parse_amount_rounds_sub_minor_fractions() -> TestResult {
        assert_eq!(parse_amount("10.005", INR)?, Money::from_minor(1_001, INR));

        Ok(())
    }
}
