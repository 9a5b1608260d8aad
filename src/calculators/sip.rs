//! Systematic investment plan projection with an optional annual step-up.

use crate::core::money::{monthly_rate, percent, round_rupee};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipPlan {
    pub monthly_investment: Decimal,
    pub expected_annual_return_percent: Decimal,
    pub years: Decimal,
    /// Yearly increase of the monthly investment, in percent
    pub step_up_percent: Decimal,
}

impl Default for SipPlan {
    fn default() -> Self {
        SipPlan {
            monthly_investment: dec!(5000),
            expected_annual_return_percent: dec!(12),
            years: dec!(10),
            step_up_percent: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SipYear {
    pub year: u32,
    pub investment: Decimal,
    pub total_invested: Decimal,
    pub balance: Decimal,
    pub returns: Decimal,
    pub cumulative_returns: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SipMonth {
    pub month: u32,
    pub year: u32,
    pub investment: Decimal,
    pub total_invested: Decimal,
    pub balance: Decimal,
    pub returns: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SipResult {
    pub future_value: Decimal,
    pub total_invested: Decimal,
    pub wealth_gained: Decimal,
    pub yearly_breakdown: Vec<SipYear>,
    pub monthly_breakdown: Vec<SipMonth>,
}

/// Whole months in the plan; a fractional final month is dropped.
fn plan_months(years: Decimal) -> u32 {
    (years * dec!(12)).trunc().to_u32().unwrap_or(0)
}

/// Month-by-month projection. Contributions are made at the start of each
/// month and the balance then earns a month's return.
pub fn calculate_sip(plan: &SipPlan) -> SipResult {
    let rate = monthly_rate(plan.expected_annual_return_percent);
    let step_up = percent(plan.step_up_percent);
    let months = plan_months(plan.years);

    let mut contribution = plan.monthly_investment;
    let mut balance = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    let mut year_investment = Decimal::ZERO;
    let mut year_start_balance = Decimal::ZERO;
    let mut yearly_breakdown = Vec::new();
    let mut monthly_breakdown = Vec::new();

    for month in 1..=months {
        if month > 1 && month % 12 == 1 && step_up > Decimal::ZERO {
            contribution = contribution.saturating_mul(Decimal::ONE + step_up);
            log::debug!("SIP month {}: stepped up to {}", month, contribution);
        }

        total_invested = total_invested.saturating_add(contribution);
        balance = balance
            .saturating_add(contribution)
            .saturating_mul(Decimal::ONE + rate);
        year_investment = year_investment.saturating_add(contribution);

        let year = month.div_ceil(12);
        let year_end = month % 12 == 0 || month == months;

        if month == 1 || year_end {
            monthly_breakdown.push(SipMonth {
                month,
                year,
                investment: round_rupee(contribution),
                total_invested: round_rupee(total_invested),
                balance: round_rupee(balance),
                returns: round_rupee(balance - total_invested),
            });
        }

        if year_end {
            yearly_breakdown.push(SipYear {
                year,
                investment: round_rupee(year_investment),
                total_invested: round_rupee(total_invested),
                balance: round_rupee(balance),
                returns: round_rupee(balance - year_start_balance - year_investment),
                cumulative_returns: round_rupee(balance - total_invested),
            });
            year_investment = Decimal::ZERO;
            year_start_balance = balance;
        }
    }

    SipResult {
        future_value: round_rupee(balance),
        total_invested: round_rupee(total_invested),
        wealth_gained: round_rupee(balance - total_invested),
        yearly_breakdown,
        monthly_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan() {
        let result = calculate_sip(&SipPlan::default());
        assert_eq!(result.future_value, dec!(1161695));
        assert_eq!(result.total_invested, dec!(600000));
        assert_eq!(result.wealth_gained, dec!(561695));
        assert_eq!(result.yearly_breakdown.len(), 10);
        // month 1 plus each year end
        assert_eq!(result.monthly_breakdown.len(), 11);
    }

    #[test]
    fn one_year() {
        let result = calculate_sip(&SipPlan {
            monthly_investment: dec!(1000),
            years: dec!(1),
            ..SipPlan::default()
        });
        assert_eq!(result.future_value, dec!(12809));
        assert_eq!(result.total_invested, dec!(12000));
        assert_eq!(result.wealth_gained, dec!(809));

        let first = &result.monthly_breakdown[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.balance, dec!(1010));
        assert_eq!(first.returns, dec!(10));

        let year = &result.yearly_breakdown[0];
        assert_eq!(year.investment, dec!(12000));
        assert_eq!(year.returns, dec!(809));
        assert_eq!(year.cumulative_returns, dec!(809));
    }

    #[test]
    fn step_up_applies_from_second_year() {
        let result = calculate_sip(&SipPlan {
            years: dec!(2),
            step_up_percent: dec!(10),
            ..SipPlan::default()
        });
        assert_eq!(result.total_invested, dec!(126000));
        assert_eq!(result.future_value, dec!(142621));
        assert_eq!(result.wealth_gained, dec!(16621));
        assert_eq!(result.yearly_breakdown[0].investment, dec!(60000));
        assert_eq!(result.yearly_breakdown[1].investment, dec!(66000));
        assert_eq!(result.monthly_breakdown[2].investment, dec!(5500));
    }

    #[test]
    fn partial_final_year_gets_a_row() {
        let result = calculate_sip(&SipPlan {
            years: dec!(1.5),
            ..SipPlan::default()
        });
        let last = result.yearly_breakdown.last().unwrap();
        assert_eq!(result.yearly_breakdown.len(), 2);
        assert_eq!(last.year, 2);
        assert_eq!(last.investment, dec!(30000));
        assert_eq!(result.monthly_breakdown.last().unwrap().month, 18);
    }

    #[test]
    fn zero_return_keeps_principal() {
        let result = calculate_sip(&SipPlan {
            expected_annual_return_percent: Decimal::ZERO,
            years: dec!(3),
            ..SipPlan::default()
        });
        assert_eq!(result.future_value, dec!(180000));
        assert_eq!(result.wealth_gained, Decimal::ZERO);
    }

    #[test]
    fn runaway_balance_saturates() {
        let result = calculate_sip(&SipPlan {
            expected_annual_return_percent: dec!(100),
            years: dec!(100),
            ..SipPlan::default()
        });
        assert_eq!(result.future_value, Decimal::MAX);
        assert_eq!(result.total_invested, dec!(6000000));
        assert_eq!(result.yearly_breakdown.len(), 100);
    }

    #[test]
    fn zero_years_is_empty() {
        let result = calculate_sip(&SipPlan {
            years: Decimal::ZERO,
            ..SipPlan::default()
        });
        assert_eq!(result.future_value, Decimal::ZERO);
        assert!(result.yearly_breakdown.is_empty());
        assert!(result.monthly_breakdown.is_empty());
    }
}
