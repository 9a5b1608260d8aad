//! Loan commands - EMI for a loan, and the loan an income can support

use crate::calculators::{
    calculate_eligibility, calculate_loan, EligibilityInput, LoanResult, LoanTerms,
};
use crate::cmd::{print_json, print_lines, Line};
use crate::core::format_inr;
use crate::core::input::parse_amount;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct LoanCommand {
    /// Loan amount
    #[arg(short, long, value_parser = parse_amount, default_value = "500000")]
    amount: Decimal,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_amount, default_value = "10")]
    rate: Decimal,

    /// Tenure in years
    #[arg(short, long, value_parser = parse_amount, default_value = "5")]
    years: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl LoanCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_loan(&LoanTerms {
            principal: self.amount,
            annual_rate_percent: self.rate,
            tenure_years: self.years,
        });

        if self.json {
            print_json(&result)
        } else {
            print_lines(
                &format!("LOAN EMI ({}% for {} years)", self.rate, self.years),
                loan_lines(&result),
            );
            Ok(())
        }
    }
}

/// Summary rows for a loan, shared with the cooperative society report
pub fn loan_lines(result: &LoanResult) -> Vec<Line> {
    vec![
        Line::new("Principal", format_inr(result.principal)),
        Line::new("Monthly EMI", format_inr(result.emi)),
        Line::new("Months", result.months.to_string()),
        Line::new("Total Interest", format_inr(result.total_interest)),
        Line::new("Total Payment", format_inr(result.total_payment)),
    ]
}

#[derive(Args, Debug)]
pub struct EligibilityCommand {
    /// Net monthly income
    #[arg(short, long, value_parser = parse_amount, default_value = "50000")]
    income: Decimal,

    /// EMIs already being paid each month
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    existing_emi: Decimal,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_amount, default_value = "10")]
    rate: Decimal,

    /// Tenure in years
    #[arg(short, long, value_parser = parse_amount, default_value = "5")]
    years: Decimal,

    /// Fixed obligations to income ratio in percent
    #[arg(short, long, value_parser = parse_amount, default_value = "50")]
    foir: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl EligibilityCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_eligibility(&EligibilityInput {
            monthly_income: self.income,
            existing_emi: self.existing_emi,
            annual_rate_percent: self.rate,
            tenure_years: self.years,
            foir_percent: self.foir,
        });

        if self.json {
            return print_json(&result);
        }

        print_lines(
            &format!("LOAN ELIGIBILITY (FOIR {}%)", self.foir),
            vec![
                Line::new("Monthly Income", format_inr(result.monthly_income)),
                Line::new("Existing EMI", format_inr(result.existing_emi)),
                Line::new("Maximum EMI", format_inr(result.max_emi)),
                Line::new("Eligible Loan Amount", format_inr(result.eligible_loan_amount)),
            ],
        );
        Ok(())
    }
}
