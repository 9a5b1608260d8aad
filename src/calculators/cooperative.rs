//! Cooperative society membership: share dividend, recurring contributions
//! and an optional member loan.

use crate::calculators::loan::{calculate_loan, LoanResult, LoanTerms};
use crate::core::formulas::annuity_fv;
use crate::core::money::{monthly_rate, percent, round_rupee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooperativeInput {
    pub share_capital: Decimal,
    pub dividend_rate_percent: Decimal,
    pub tenure_years: Decimal,
    pub monthly_contribution: Decimal,
    pub interest_rate_percent: Decimal,
    pub loan_amount: Decimal,
    pub loan_interest_rate_percent: Decimal,
    pub loan_tenure_years: Decimal,
}

impl Default for CooperativeInput {
    fn default() -> Self {
        CooperativeInput {
            share_capital: dec!(1000),
            dividend_rate_percent: dec!(8),
            tenure_years: dec!(5),
            monthly_contribution: dec!(500),
            interest_rate_percent: dec!(9),
            loan_amount: Decimal::ZERO,
            loan_interest_rate_percent: dec!(12),
            loan_tenure_years: Decimal::ZERO,
        }
    }
}

impl CooperativeInput {
    pub fn has_loan(&self) -> bool {
        self.loan_amount > Decimal::ZERO && self.loan_tenure_years > Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CooperativeResult {
    pub share_capital: Decimal,
    pub total_dividend: Decimal,
    pub contribution_returns: Decimal,
    pub maturity_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<LoanResult>,
}

pub fn calculate_cooperative(input: &CooperativeInput) -> CooperativeResult {
    // simple interest on share capital
    let dividend = input.share_capital * percent(input.dividend_rate_percent) * input.tenure_years;
    let contribution_returns = annuity_fv(
        input.monthly_contribution,
        monthly_rate(input.interest_rate_percent),
        input.tenure_years * dec!(12),
    );
    let maturity = input
        .share_capital
        .saturating_add(dividend)
        .saturating_add(contribution_returns);

    let loan = input.has_loan().then(|| {
        calculate_loan(&LoanTerms {
            principal: input.loan_amount,
            annual_rate_percent: input.loan_interest_rate_percent,
            tenure_years: input.loan_tenure_years,
        })
    });

    CooperativeResult {
        share_capital: input.share_capital,
        total_dividend: round_rupee(dividend),
        contribution_returns: round_rupee(contribution_returns),
        maturity_amount: round_rupee(maturity),
        loan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_loan() {
        let result = calculate_cooperative(&CooperativeInput::default());
        assert_eq!(result.total_dividend, dec!(400));
        assert_eq!(result.contribution_returns, dec!(37712));
        assert_eq!(result.maturity_amount, dec!(39112));
        assert_eq!(result.loan, None);
    }

    #[test]
    fn loan_needs_amount_and_tenure() {
        let amount_only = CooperativeInput {
            loan_amount: dec!(100000),
            ..CooperativeInput::default()
        };
        assert!(!amount_only.has_loan());
        assert_eq!(calculate_cooperative(&amount_only).loan, None);

        let with_tenure = CooperativeInput {
            loan_tenure_years: dec!(5),
            ..amount_only
        };
        let loan = calculate_cooperative(&with_tenure).loan.unwrap();
        assert_eq!(loan.principal, dec!(100000));
        assert_eq!(loan.months, dec!(60));
        assert_eq!(loan.emi, dec!(2224));
    }

    #[test]
    fn zero_interest_contributions_just_accumulate() {
        let result = calculate_cooperative(&CooperativeInput {
            interest_rate_percent: Decimal::ZERO,
            ..CooperativeInput::default()
        });
        assert_eq!(result.contribution_returns, dec!(30000));
        assert_eq!(result.maturity_amount, dec!(31400));
    }
}
