//! Form 16 command - annual income tax computation

use crate::cmd::{print_json, print_lines, read_input, Line};
use crate::core::format_inr;
use crate::core::input::parse_amount;
use crate::core::EmployeeType;
use crate::tax::{calculate_tax, TaxInput, TaxResult};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Form16Command {
    /// JSON file with the tax input ("-" for stdin); replaces the flags below
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    pan: String,

    #[arg(long, default_value = "")]
    employer: String,

    /// Financial year, e.g. 2023-2024
    #[arg(short, long, default_value = "2023-2024")]
    year: String,

    /// Monthly gross salary
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    salary: Decimal,

    /// Annual income from other sources
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    other_income: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    hra_exemption: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    lta_exemption: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "50000")]
    standard_deduction: Decimal,

    /// Professional tax paid in the year
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    professional_tax: Decimal,

    /// Provident fund contribution (80C)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pf: Decimal,

    /// PPF deposits (80C)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    ppf: Decimal,

    /// Life insurance premiums (80C)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    lic: Decimal,

    /// Children's tuition fees (80C)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    tuition: Decimal,

    /// Home loan interest (section 24)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    home_loan_interest: Decimal,

    /// Medical insurance premiums (80D)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    medical: Decimal,

    /// Donations (80G)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    donations: Decimal,

    /// GPF or NPS
    #[arg(short = 't', long, default_value = "GPF")]
    employee_type: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl Form16Command {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = match &self.input {
            Some(path) => read_input(path)?,
            None => self.input_from_flags(),
        };
        let result = calculate_tax(&input);

        if self.json {
            print_json(&result)
        } else {
            print_computation(&input, &result);
            Ok(())
        }
    }

    fn input_from_flags(&self) -> TaxInput {
        let employee_type = EmployeeType::from_str(&self.employee_type).unwrap_or_else(|| {
            log::warn!("unknown employee type '{}'; using GPF", self.employee_type);
            EmployeeType::default()
        });
        TaxInput {
            name: self.name.clone(),
            pan: self.pan.clone(),
            employer: self.employer.clone(),
            financial_year: self.year.clone(),
            monthly_salary: self.salary,
            other_income: self.other_income,
            hra_exemption: self.hra_exemption,
            lta_exemption: self.lta_exemption,
            standard_deduction: self.standard_deduction,
            professional_tax: self.professional_tax,
            provident_fund: self.pf,
            ppf: self.ppf,
            life_insurance: self.lic,
            tuition_fees: self.tuition,
            home_loan_interest: self.home_loan_interest,
            medical_insurance: self.medical,
            donation_80g: self.donations,
            employee_type,
        }
    }
}

fn print_computation(input: &TaxInput, result: &TaxResult) {
    let mut header = format!("FORM 16 - FY {}", result.financial_year);
    if !input.name.is_empty() {
        header.push_str(&format!(" - {}", input.name));
    }
    if !input.pan.is_empty() {
        header.push_str(&format!(" ({})", input.pan));
    }

    print_lines(
        &header,
        vec![
            Line::new("Gross Salary", format_inr(result.gross_salary)),
            Line::new("Other Income", format_inr(input.other_income)),
            Line::new("Gross Total Income", format_inr(result.gross_total_income)),
            Line::new("Less: Exemptions (HRA, LTA)", format_inr(result.total_exemptions)),
            Line::new("Income after Exemptions", format_inr(result.income_after_exemptions)),
        ],
    );

    let mut deductions = vec![
        Line::new("Standard Deduction", format_inr(input.standard_deduction)),
        Line::new("Professional Tax", format_inr(input.professional_tax)),
        Line::new("80C", format_inr(result.deduction_80c)),
    ];
    if input.employee_type == EmployeeType::Nps {
        deductions.push(Line::new("  incl. NPS contribution", format_inr(result.nps_contribution)));
        deductions.push(Line::new("80CCD(1B)", format_inr(result.deduction_80ccd1b)));
    }
    deductions.extend([
        Line::new("80D", format_inr(result.deduction_80d)),
        Line::new("80G", format_inr(result.deduction_80g)),
        Line::new("Section 24", format_inr(result.deduction_24)),
        Line::new("Total Deductions", format_inr(result.total_deductions)),
    ]);
    print_lines("Deductions", deductions);

    print_lines(
        "Tax",
        vec![
            Line::new("Taxable Income", format_inr(result.taxable_income)),
            Line::new("Income Tax", format_inr(result.tax_before_cess)),
            Line::new("Health & Education Cess (4%)", format_inr(result.cess)),
            Line::new("Total Tax Payable", format_inr(result.total_tax)),
        ],
    );
}
