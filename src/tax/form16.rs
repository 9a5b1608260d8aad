//! Annual income tax computation behind a Form 16.

use crate::core::employee::EmployeeType;
use crate::core::input::{deserialize_lenient, InputField};
use crate::core::money::round_rupee;
use crate::tax::regime::FinancialYear;
use paycalc_derive::InputFields;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_financial_year() -> String {
    "2023-2024".to_string()
}

fn default_standard_deduction() -> Decimal {
    FinancialYear::default().standard_deduction()
}

/// Salary, exemptions and Chapter VI-A investments for one financial year
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, InputFields)]
pub struct TaxInput {
    /// Employee name
    #[serde(default)]
    pub name: String,
    /// Permanent Account Number
    #[serde(default)]
    pub pan: String,
    /// Employer name
    #[serde(default)]
    pub employer: String,
    /// Financial year, e.g. "2023-2024"
    #[serde(default = "default_financial_year")]
    pub financial_year: String,
    /// Monthly gross salary
    #[serde(deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub monthly_salary: Decimal,
    /// Annual income from other sources
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub other_income: Decimal,
    /// HRA exemption under section 10(13A)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub hra_exemption: Decimal,
    /// Leave travel allowance exemption
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub lta_exemption: Decimal,
    /// Standard deduction (50,000 for FY 2023-24)
    #[serde(default = "default_standard_deduction", deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub standard_deduction: Decimal,
    /// Professional tax paid in the year
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub professional_tax: Decimal,
    /// Provident fund contribution (80C)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub provident_fund: Decimal,
    /// Public Provident Fund deposits (80C)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub ppf: Decimal,
    /// Life insurance premiums (80C)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub life_insurance: Decimal,
    /// Children's tuition fees (80C)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub tuition_fees: Decimal,
    /// Home loan interest (section 24)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub home_loan_interest: Decimal,
    /// Medical insurance premiums (80D)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub medical_insurance: Decimal,
    /// Donations (80G)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub donation_80g: Decimal,
    /// GPF or NPS; NPS adds the 10% contribution to 80C and 80CCD(1B)
    #[serde(default)]
    pub employee_type: EmployeeType,
}

impl Default for TaxInput {
    fn default() -> Self {
        TaxInput {
            name: String::new(),
            pan: String::new(),
            employer: String::new(),
            financial_year: default_financial_year(),
            monthly_salary: Decimal::ZERO,
            other_income: Decimal::ZERO,
            hra_exemption: Decimal::ZERO,
            lta_exemption: Decimal::ZERO,
            standard_deduction: default_standard_deduction(),
            professional_tax: Decimal::ZERO,
            provident_fund: Decimal::ZERO,
            ppf: Decimal::ZERO,
            life_insurance: Decimal::ZERO,
            tuition_fees: Decimal::ZERO,
            home_loan_interest: Decimal::ZERO,
            medical_insurance: Decimal::ZERO,
            donation_80g: Decimal::ZERO,
            employee_type: EmployeeType::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub financial_year: String,
    pub gross_salary: Decimal,
    pub gross_total_income: Decimal,
    pub total_exemptions: Decimal,
    pub income_after_exemptions: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_before_cess: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
    pub deduction_80c: Decimal,
    pub deduction_80d: Decimal,
    pub deduction_80g: Decimal,
    pub deduction_24: Decimal,
    pub deduction_80ccd1b: Decimal,
    pub nps_contribution: Decimal,
}

/// Compute annual income tax for a salaried employee
pub fn calculate_tax(input: &TaxInput) -> TaxResult {
    let year = FinancialYear::parse(&input.financial_year).unwrap_or_default();

    let gross_salary = input.monthly_salary * dec!(12);
    let gross_total_income = gross_salary + input.other_income;
    let total_exemptions = input.hra_exemption + input.lta_exemption;
    let income_after_exemptions = gross_total_income - total_exemptions;

    let nps_contribution = match input.employee_type {
        EmployeeType::Nps => input.monthly_salary * dec!(0.10) * dec!(12),
        EmployeeType::Gpf => Decimal::ZERO,
    };

    let deduction_80c = (input.provident_fund
        + input.ppf
        + input.life_insurance
        + input.tuition_fees
        + nps_contribution)
        .min(year.limit_80c());
    let deduction_80ccd1b = match input.employee_type {
        EmployeeType::Nps => nps_contribution.min(year.limit_80ccd1b()),
        EmployeeType::Gpf => Decimal::ZERO,
    };
    let deduction_80d = input.medical_insurance.min(year.limit_80d());
    let deduction_80g = input.donation_80g;
    let deduction_24 = input.home_loan_interest.min(year.limit_24());

    let total_deductions = input.standard_deduction
        + deduction_80c
        + deduction_80d
        + deduction_80g
        + deduction_24
        + deduction_80ccd1b
        + input.professional_tax;

    let taxable_income = (income_after_exemptions - total_deductions).max(Decimal::ZERO);
    let tax = year.slab_tax(taxable_income);
    let cess = tax * year.cess_rate();

    log::debug!(
        "Form 16 {}: gross={}, deductions={}, taxable={}, tax={}, cess={}",
        year,
        gross_total_income,
        total_deductions,
        taxable_income,
        tax,
        cess
    );

    TaxResult {
        financial_year: year.display(),
        gross_salary,
        gross_total_income,
        total_exemptions,
        income_after_exemptions,
        total_deductions,
        taxable_income,
        tax_before_cess: round_rupee(tax),
        cess: round_rupee(cess),
        total_tax: round_rupee(tax + cess),
        deduction_80c,
        deduction_80d,
        deduction_80g,
        deduction_24,
        deduction_80ccd1b,
        nps_contribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Input whose taxable income equals `annual` exactly (no deductions).
    fn taxable(annual: Decimal) -> TaxInput {
        TaxInput {
            other_income: annual,
            standard_deduction: Decimal::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn default_matches_json_defaults() {
        let from_json: TaxInput = serde_json::from_str(r#"{"monthly_salary": 0}"#).unwrap();
        let default = TaxInput::default();
        assert_eq!(default.financial_year, "2023-2024");
        assert_eq!(default.standard_deduction, dec!(50000));
        assert_eq!(default.financial_year, from_json.financial_year);
        assert_eq!(default.standard_deduction, from_json.standard_deduction);
        assert_eq!(default.employee_type, from_json.employee_type);
    }

    #[test]
    fn zero_income_zero_tax() {
        let result = calculate_tax(&taxable(Decimal::ZERO));
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
    }

    #[test]
    fn three_lakh_pays_2600_with_cess() {
        let result = calculate_tax(&taxable(dec!(300000)));
        assert_eq!(result.tax_before_cess, dec!(2500));
        assert_eq!(result.cess, dec!(100));
        assert_eq!(result.total_tax, dec!(2600));
    }

    #[test]
    fn top_slab() {
        let result = calculate_tax(&taxable(dec!(1800000)));
        assert_eq!(result.tax_before_cess, dec!(277500));
        assert_eq!(result.cess, dec!(11100));
        assert_eq!(result.total_tax, dec!(288600));
    }

    #[test]
    fn taxable_income_floored_at_zero() {
        let input = TaxInput {
            monthly_salary: dec!(10000),
            life_insurance: dec!(500000),
            ..TaxInput::default()
        };
        let result = calculate_tax(&input);
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
    }

    #[test]
    fn deduction_caps_apply() {
        let input = TaxInput {
            monthly_salary: dec!(150000),
            standard_deduction: dec!(50000),
            provident_fund: dec!(100000),
            ppf: dec!(100000),
            medical_insurance: dec!(40000),
            home_loan_interest: dec!(300000),
            donation_80g: dec!(70000),
            professional_tax: dec!(2500),
            ..TaxInput::default()
        };
        let result = calculate_tax(&input);
        assert_eq!(result.gross_salary, dec!(1800000));
        assert_eq!(result.deduction_80c, dec!(150000));
        assert_eq!(result.deduction_80d, dec!(25000));
        assert_eq!(result.deduction_24, dec!(200000));
        assert_eq!(result.deduction_80g, dec!(70000));
        assert_eq!(result.deduction_80ccd1b, Decimal::ZERO);
        assert_eq!(result.total_deductions, dec!(497500));
        assert_eq!(result.taxable_income, dec!(1302500));
    }

    #[test]
    fn nps_contribution_counts_towards_80c_and_80ccd1b() {
        let input = TaxInput {
            monthly_salary: dec!(50000),
            standard_deduction: dec!(50000),
            employee_type: EmployeeType::Nps,
            ..TaxInput::default()
        };
        let result = calculate_tax(&input);
        assert_eq!(result.nps_contribution, dec!(60000));
        assert_eq!(result.deduction_80c, dec!(60000));
        assert_eq!(result.deduction_80ccd1b, dec!(50000));
        // 600000 - 50000 - 60000 - 50000 = 440000 -> 5% of 190000
        assert_eq!(result.taxable_income, dec!(440000));
        assert_eq!(result.tax_before_cess, dec!(9500));
        assert_eq!(result.total_tax, dec!(9880));
    }

    #[test]
    fn exemptions_reduce_income() {
        let input = TaxInput {
            monthly_salary: dec!(50000),
            hra_exemption: dec!(60000),
            lta_exemption: dec!(20000),
            standard_deduction: dec!(50000),
            ..TaxInput::default()
        };
        let result = calculate_tax(&input);
        assert_eq!(result.total_exemptions, dec!(80000));
        assert_eq!(result.income_after_exemptions, dec!(520000));
        assert_eq!(result.taxable_income, dec!(470000));
    }

    #[test]
    fn unparseable_year_uses_default_regime() {
        let input = TaxInput {
            financial_year: "current".to_string(),
            ..taxable(dec!(300000))
        };
        let result = calculate_tax(&input);
        assert_eq!(result.financial_year, "2023-24");
        assert_eq!(result.total_tax, dec!(2600));
    }
}
