use crate::core::formulas::loan_eligibility;
use crate::core::money::{monthly_rate, percent, round_rupee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityInput {
    pub monthly_income: Decimal,
    pub existing_emi: Decimal,
    pub annual_rate_percent: Decimal,
    pub tenure_years: Decimal,
    /// Fixed obligations to income ratio, in percent
    pub foir_percent: Decimal,
}

impl Default for EligibilityInput {
    fn default() -> Self {
        EligibilityInput {
            monthly_income: dec!(50000),
            existing_emi: Decimal::ZERO,
            annual_rate_percent: dec!(10),
            tenure_years: dec!(5),
            foir_percent: dec!(50),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub max_emi: Decimal,
    pub eligible_loan_amount: Decimal,
    pub monthly_income: Decimal,
    pub existing_emi: Decimal,
}

/// Largest loan whose EMI fits within the FOIR limit after existing EMIs.
///
/// The EMI headroom is not floored: existing EMIs above the limit give a
/// negative headroom and a negative eligible amount.
pub fn calculate_eligibility(input: &EligibilityInput) -> EligibilityResult {
    let max_emi = input.monthly_income * percent(input.foir_percent) - input.existing_emi;
    let months = input.tenure_years * dec!(12);
    let amount = loan_eligibility(max_emi, monthly_rate(input.annual_rate_percent), months);

    if max_emi < Decimal::ZERO {
        log::warn!(
            "existing EMI {} exceeds the FOIR limit on income {}",
            input.existing_emi,
            input.monthly_income
        );
    }

    EligibilityResult {
        max_emi: round_rupee(max_emi),
        eligible_loan_amount: round_rupee(amount),
        monthly_income: input.monthly_income,
        existing_emi: input.existing_emi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eligibility() {
        let result = calculate_eligibility(&EligibilityInput::default());
        assert_eq!(result.max_emi, dec!(25000));
        assert_eq!(result.eligible_loan_amount, dec!(1176634));
    }

    #[test]
    fn existing_emi_reduces_headroom() {
        let result = calculate_eligibility(&EligibilityInput {
            existing_emi: dec!(5000),
            annual_rate_percent: Decimal::ZERO,
            ..EligibilityInput::default()
        });
        assert_eq!(result.max_emi, dec!(20000));
        assert_eq!(result.eligible_loan_amount, dec!(1200000));
    }

    #[test]
    fn over_committed_income_goes_negative() {
        let result = calculate_eligibility(&EligibilityInput {
            existing_emi: dec!(30000),
            annual_rate_percent: Decimal::ZERO,
            ..EligibilityInput::default()
        });
        assert_eq!(result.max_emi, dec!(-5000));
        assert_eq!(result.eligible_loan_amount, dec!(-300000));
    }

    #[test]
    fn zero_tenure_is_not_eligible() {
        let result = calculate_eligibility(&EligibilityInput {
            tenure_years: Decimal::ZERO,
            ..EligibilityInput::default()
        });
        assert_eq!(result.eligible_loan_amount, Decimal::ZERO);
    }
}
