//! Input coercion and validation shared by the command-line and JSON readers.
//!
//! Numbers are read leniently: anything that does not parse as a decimal is
//! treated as zero, the way a blank or garbled form field would be.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("date of joining must be after date of birth")]
    JoiningBeforeBirth,
    #[error("age at joining must be at least 18 years (was {0})")]
    JoiningUnderage(u32),
    #[error("retirement date must be after date of joining")]
    RetirementBeforeJoining,
    #[error("invalid allowance '{0}' (expected TYPE or TYPE=AMOUNT)")]
    InvalidAllowance(String),
}

/// Description of one input record field, generated by `#[derive(InputFields)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Parse a number, coercing anything unparseable to zero.
///
/// Like a browser form field, only the leading numeric part is read, so
/// `"50000abc"` is 50000 and `"1e5"` is 100000.
pub fn lenient_decimal(s: &str) -> Decimal {
    let trimmed = s.trim().replace(',', "");
    let prefix = numeric_prefix(&trimmed);
    let parsed = if prefix.contains(['e', 'E']) {
        Decimal::from_scientific(prefix)
    } else {
        Decimal::from_str(prefix)
    };
    match parsed {
        Ok(value) => {
            if prefix.len() < trimmed.len() {
                log::warn!("ignoring trailing text in '{}'; using {}", s, value);
            }
            value
        }
        Err(_) => {
            if !trimmed.is_empty() {
                log::warn!("could not parse '{}' as a number; using 0", s);
            }
            Decimal::ZERO
        }
    }
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]`; empty when there are no digits.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(start);
    let mut seen_digit = end > start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 {
            seen_digit = true;
            end = fraction_end;
        }
    }
    if !seen_digit {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    &s[..end]
}

/// clap value parser for amounts, rates and tenures.
pub fn parse_amount(s: &str) -> Result<Decimal, Infallible> {
    Ok(lenient_decimal(s))
}

/// clap value parser for whole counts (days, levels); fractions are truncated.
pub fn parse_count(s: &str) -> Result<u32, Infallible> {
    Ok(count(lenient_decimal(s)))
}

fn count(value: Decimal) -> u32 {
    value.trunc().to_u32().unwrap_or_else(|| {
        log::warn!("'{}' is not a non-negative whole number; using 0", value);
        0
    })
}

pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate(s.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

fn coerce(value: Option<NumberOrString>) -> Decimal {
    match value {
        Some(NumberOrString::Number(n)) => lenient_decimal(&n.to_string()),
        Some(NumberOrString::Text(s)) => lenient_decimal(&s),
        None => Decimal::ZERO,
    }
}

/// Deserialize a JSON number, numeric string or null as a decimal (bad input -> 0).
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(coerce(value))
}

/// Deserialize a whole count (days) from a JSON number or numeric string.
/// Fractions are truncated; negative or unparseable input becomes 0.
pub fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(count(coerce(value)))
}

/// Optional variant of [`deserialize_lenient`]; null stays `None`.
pub fn deserialize_lenient_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value.map(|v| coerce(Some(v))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lenient_numbers() {
        assert_eq!(lenient_decimal("50000"), dec!(50000));
        assert_eq!(lenient_decimal(" 1,00,000 "), dec!(100000));
        assert_eq!(lenient_decimal("7.5"), dec!(7.5));
        assert_eq!(lenient_decimal("abc"), Decimal::ZERO);
        assert_eq!(lenient_decimal(""), Decimal::ZERO);
    }

    #[test]
    fn leading_numeric_part_is_read() {
        assert_eq!(lenient_decimal("50000abc"), dec!(50000));
        assert_eq!(lenient_decimal("1e5"), dec!(100000));
        assert_eq!(lenient_decimal("2.5E-1"), dec!(0.25));
        assert_eq!(lenient_decimal("-0.5 years"), dec!(-0.5));
        assert_eq!(lenient_decimal("12.x"), dec!(12));
        assert_eq!(lenient_decimal("7e"), dec!(7));
        assert_eq!(lenient_decimal("+8%"), dec!(8));
        assert_eq!(lenient_decimal(".e5"), Decimal::ZERO);
        assert_eq!(lenient_decimal("1e99"), Decimal::ZERO);
    }

    #[test]
    fn counts_truncate_and_reject_negatives() {
        assert_eq!(parse_count("300").unwrap(), 300);
        assert_eq!(parse_count("12.9").unwrap(), 12);
        assert_eq!(parse_count("-4").unwrap(), 0);
        assert_eq!(parse_count("x").unwrap(), 0);
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_date("2024-05-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
        );
        assert_eq!(
            parse_date("31/05/2024"),
            Err(InputError::InvalidDate("31/05/2024".to_string()))
        );
    }

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        amount: Decimal,
        #[serde(default, deserialize_with = "deserialize_lenient_opt")]
        rate: Option<Decimal>,
    }

    #[derive(Deserialize)]
    struct Leave {
        #[serde(default, deserialize_with = "deserialize_lenient_count")]
        days: u32,
    }

    #[test]
    fn json_counts_accept_numeric_strings() {
        let leave: Leave = serde_json::from_str(r#"{"days": "300"}"#).unwrap();
        assert_eq!(leave.days, 300);
        let leave: Leave = serde_json::from_str(r#"{"days": 45.9}"#).unwrap();
        assert_eq!(leave.days, 45);
        let leave: Leave = serde_json::from_str(r#"{"days": -3}"#).unwrap();
        assert_eq!(leave.days, 0);
        let leave: Leave = serde_json::from_str("{}").unwrap();
        assert_eq!(leave.days, 0);
    }

    #[test]
    fn json_numbers_and_strings() {
        let s: Sample = serde_json::from_str(r#"{"amount": 1200.5, "rate": "55"}"#).unwrap();
        assert_eq!(s.amount, dec!(1200.5));
        assert_eq!(s.rate, Some(dec!(55)));

        let s: Sample = serde_json::from_str(r#"{"amount": "n/a", "rate": null}"#).unwrap();
        assert_eq!(s.amount, Decimal::ZERO);
        assert_eq!(s.rate, None);

        let s: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(s.amount, Decimal::ZERO);
        assert_eq!(s.rate, None);
    }
}
