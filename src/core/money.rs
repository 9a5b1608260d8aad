//! Rupee arithmetic shared by every calculator.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round half away from zero to the nearest whole rupee.
pub fn round_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round half away from zero to the nearest hundred rupees.
pub fn round_to_hundred(amount: Decimal) -> Decimal {
    round_rupee(amount / dec!(100)) * dec!(100)
}

/// Convert a percentage figure (e.g. `55`) to a fraction (`0.55`).
pub fn percent(rate: Decimal) -> Decimal {
    rate / dec!(100)
}

/// Monthly fractional rate for an annual percentage rate.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / dec!(12) / dec!(100)
}

/// `(1 + rate)^periods`. Periods may be fractional.
///
/// Saturates at `Decimal::MAX` instead of panicking when the power overflows.
pub fn growth_factor(rate: Decimal, periods: Decimal) -> Decimal {
    match (Decimal::ONE + rate).checked_powd(periods) {
        Some(factor) => factor,
        None => {
            log::warn!(
                "growth factor overflow: rate={}, periods={}; saturating",
                rate,
                periods
            );
            Decimal::MAX
        }
    }
}

/// `numerator / denominator`, saturating at `Decimal::MAX` or `Decimal::MIN`
/// when the quotient overflows. A zero denominator yields zero.
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        log::warn!("division overflow: {} / {}; saturating", numerator, denominator);
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Format an amount as whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_rupee(amount);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_indian(&digits);
    if rounded < Decimal::ZERO {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Last three digits form one group, then groups of two (lakh, crore).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_rupee(dec!(2.5)), dec!(3));
        assert_eq!(round_rupee(dec!(2.49)), dec!(2));
        assert_eq!(round_rupee(dec!(-2.5)), dec!(-3));
    }

    #[test]
    fn rounds_to_hundred() {
        assert_eq!(round_to_hundred(dec!(15450)), dec!(15500));
        assert_eq!(round_to_hundred(dec!(15449.99)), dec!(15400));
    }

    #[test]
    fn monthly_rate_from_annual_percent() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
    }

    #[test]
    fn growth_factor_integer_and_zero_periods() {
        assert_eq!(growth_factor(dec!(0.1), dec!(2)), dec!(1.21));
        assert_eq!(growth_factor(dec!(0.1), Decimal::ZERO), Decimal::ONE);
    }

    #[test]
    fn growth_factor_saturates_on_overflow() {
        assert_eq!(growth_factor(dec!(0.07), dec!(1000)), Decimal::MAX);
    }

    #[test]
    fn saturating_div_bounds() {
        assert_eq!(saturating_div(dec!(10), dec!(4)), dec!(2.5));
        assert_eq!(saturating_div(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(saturating_div(Decimal::MAX, dec!(0.5)), Decimal::MAX);
        assert_eq!(saturating_div(Decimal::MAX, dec!(-0.5)), Decimal::MIN);
    }

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000");
        assert_eq!(format_inr(dec!(1234567.4)), "₹12,34,567");
        assert_eq!(format_inr(dec!(-86769)), "-₹86,769");
    }
}
