use crate::core::formulas::compound_maturity;
use crate::core::money::round_rupee;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// How often interest is credited to a fixed deposit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl Compounding {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::SemiAnnually => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdInput {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub tenure_years: Decimal,
    pub compounding: Compounding,
}

impl Default for FdInput {
    fn default() -> Self {
        FdInput {
            principal: dec!(100000),
            annual_rate_percent: dec!(7),
            tenure_years: dec!(5),
            compounding: Compounding::Annually,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FdResult {
    pub maturity_amount: Decimal,
    pub interest_earned: Decimal,
    pub principal: Decimal,
    pub tenure_years: Decimal,
    pub periods_per_year: u32,
}

pub fn calculate_fd(input: &FdInput) -> FdResult {
    let periods_per_year = input.compounding.periods_per_year();
    let maturity = compound_maturity(
        input.principal,
        input.annual_rate_percent,
        periods_per_year,
        input.tenure_years,
    );

    FdResult {
        maturity_amount: round_rupee(maturity),
        interest_earned: round_rupee(maturity - input.principal),
        principal: input.principal,
        tenure_years: input.tenure_years,
        periods_per_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_compounding() {
        let result = calculate_fd(&FdInput::default());
        assert_eq!(result.maturity_amount, dec!(140255));
        assert_eq!(result.interest_earned, dec!(40255));
        assert_eq!(result.periods_per_year, 1);
    }

    #[test]
    fn quarterly_compounding_earns_more() {
        let result = calculate_fd(&FdInput {
            compounding: Compounding::Quarterly,
            ..FdInput::default()
        });
        assert_eq!(result.maturity_amount, dec!(141478));
        assert_eq!(result.periods_per_year, 4);
    }

    #[test]
    fn zero_tenure_returns_principal() {
        let result = calculate_fd(&FdInput {
            tenure_years: Decimal::ZERO,
            ..FdInput::default()
        });
        assert_eq!(result.maturity_amount, dec!(100000));
        assert_eq!(result.interest_earned, Decimal::ZERO);
    }

    #[test]
    fn thousand_year_deposit_saturates() {
        let result = calculate_fd(&FdInput {
            tenure_years: dec!(1000),
            ..FdInput::default()
        });
        assert_eq!(result.maturity_amount, Decimal::MAX);
        assert_eq!(result.interest_earned, Decimal::MAX - dec!(100000));
    }

    #[test]
    fn frequencies() {
        assert_eq!(Compounding::SemiAnnually.periods_per_year(), 2);
        assert_eq!(Compounding::Monthly.periods_per_year(), 12);
    }
}
