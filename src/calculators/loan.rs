use crate::core::formulas::emi;
use crate::core::money::{monthly_rate, round_rupee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanTerms {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub tenure_years: Decimal,
}

impl Default for LoanTerms {
    fn default() -> Self {
        LoanTerms {
            principal: dec!(500000),
            annual_rate_percent: dec!(10),
            tenure_years: dec!(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanResult {
    pub emi: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub principal: Decimal,
    pub months: Decimal,
}

/// Monthly instalment and totals for a loan. Totals are derived from the
/// unrounded EMI and rounded last.
pub fn calculate_loan(terms: &LoanTerms) -> LoanResult {
    let months = terms.tenure_years * dec!(12);
    let rate = monthly_rate(terms.annual_rate_percent);
    let instalment = emi(terms.principal, rate, months);
    let total_payment = instalment.saturating_mul(months);
    let total_interest = total_payment - terms.principal;

    log::debug!(
        "Loan: principal={}, monthly_rate={}, months={}, emi={}",
        terms.principal,
        rate,
        months,
        instalment
    );

    LoanResult {
        emi: round_rupee(instalment),
        total_payment: round_rupee(total_payment),
        total_interest: round_rupee(total_interest),
        principal: terms.principal,
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loan() {
        let result = calculate_loan(&LoanTerms::default());
        assert_eq!(result.emi, dec!(10624));
        assert_eq!(result.total_payment, dec!(637411));
        assert_eq!(result.total_interest, dec!(137411));
        assert_eq!(result.months, dec!(60));
    }

    #[test]
    fn zero_rate_splits_principal_evenly() {
        let result = calculate_loan(&LoanTerms {
            principal: dec!(120000),
            annual_rate_percent: Decimal::ZERO,
            tenure_years: dec!(1),
        });
        assert_eq!(result.emi, dec!(10000));
        assert_eq!(result.total_payment, dec!(120000));
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn zero_tenure_has_no_instalment() {
        let result = calculate_loan(&LoanTerms {
            tenure_years: Decimal::ZERO,
            ..LoanTerms::default()
        });
        assert_eq!(result.emi, Decimal::ZERO);
        assert_eq!(result.total_payment, Decimal::ZERO);
        assert_eq!(result.total_interest, dec!(-500000));
    }

    #[test]
    fn very_long_tenure_pays_interest_only() {
        let result = calculate_loan(&LoanTerms {
            annual_rate_percent: dec!(24),
            tenure_years: dec!(400),
            ..LoanTerms::default()
        });
        assert_eq!(result.emi, dec!(10000));
        assert_eq!(result.total_payment, dec!(48000000));
        assert_eq!(result.total_interest, dec!(47500000));
    }
}
