//! Payslip command - monthly allowances, deductions and net salary

use crate::cmd::{print_json, print_lines, read_input, Line};
use crate::core::input::parse_amount;
use crate::core::tables::CURRENT_DA_RATE;
use crate::core::{
    calculate_payslip, format_inr, Allowance, CityCategory, EmployeeType, HandicapStatus,
    InputError, PayslipInput, PayslipResult, Warning,
};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PayslipCommand {
    /// JSON file with the payslip input ("-" for stdin); replaces the flags below
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Monthly basic salary
    #[arg(short, long, value_parser = parse_amount)]
    basic: Option<Decimal>,

    /// DA rate in percent
    #[arg(long, value_parser = parse_amount, default_value_t = CURRENT_DA_RATE)]
    da_rate: Decimal,

    /// City of posting (see `paycalc cities`)
    #[arg(short, long)]
    city: Option<String>,

    /// HRA category X, Y or Z; derived from the city when omitted
    #[arg(long)]
    category: Option<String>,

    /// Employee class, e.g. "Class 2"
    #[arg(long)]
    class: Option<String>,

    /// GPF or NPS
    #[arg(short = 't', long, default_value = "GPF")]
    employee_type: String,

    /// Regular or Handicap
    #[arg(long, default_value = "Regular")]
    handicap: String,

    /// Permanent travelling allowance
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    per_ta: Decimal,

    /// Additional allowance as TYPE or TYPE=AMOUNT (repeatable), e.g. NPA
    #[arg(short, long = "allowance")]
    allowances: Vec<Allowance>,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    gpf_subscription: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    gpf_recovery: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    festival_advances: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    other_advances: Decimal,

    #[arg(long, value_parser = parse_amount, default_value = "0")]
    other_recovery: Decimal,

    /// Monthly income tax (TDS)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    income_tax: Decimal,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,
}

impl PayslipCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = match &self.input {
            Some(path) => read_input(path)?,
            None => self.input_from_flags()?,
        };
        let result = calculate_payslip(&input);

        if self.json {
            print_json(&result)
        } else {
            print_payslip(&input, &result);
            Ok(())
        }
    }

    fn input_from_flags(&self) -> Result<PayslipInput, InputError> {
        let basic_salary = self.basic.ok_or(InputError::Missing { field: "basic" })?;
        let city = self.city.clone().ok_or(InputError::Missing { field: "city" })?;
        let class = self.class.clone().ok_or(InputError::Missing { field: "class" })?;

        let city_category = self.category.as_deref().and_then(|c| {
            let category = CityCategory::from_str(c);
            if category.is_none() {
                log::warn!("unknown category '{}'; deriving it from the city", c);
            }
            category
        });
        let employee_type = EmployeeType::from_str(&self.employee_type).unwrap_or_else(|| {
            log::warn!("unknown employee type '{}'; using GPF", self.employee_type);
            EmployeeType::default()
        });
        let handicap_status = HandicapStatus::from_str(&self.handicap).unwrap_or_else(|| {
            log::warn!("unknown handicap status '{}'; using Regular", self.handicap);
            HandicapStatus::default()
        });

        Ok(PayslipInput {
            basic_salary,
            da_rate: self.da_rate,
            city,
            city_category,
            class,
            employee_type,
            handicap_status,
            per_ta: self.per_ta,
            additional_allowances: self.allowances.clone(),
            gpf_subscription: self.gpf_subscription,
            gpf_recovery: self.gpf_recovery,
            festival_advances: self.festival_advances,
            other_advances: self.other_advances,
            other_recovery: self.other_recovery,
            income_tax: self.income_tax,
        })
    }
}

fn print_payslip(input: &PayslipInput, result: &PayslipResult) {
    println!();
    println!(
        "PAYSLIP - {} ({}, category {}{}), {}",
        input.city,
        input.class,
        result.city_category,
        if result.is_metro { ", metro" } else { "" },
        input.employee_type
    );

    let mut allowances: Vec<Line> = result
        .allowances
        .items()
        .iter()
        .map(|(label, amount)| Line::new(*label, format_inr(*amount)))
        .collect();
    for line in &result.additional_allowance_lines {
        allowances.push(Line::new(format!("  {}", line.label), format_inr(line.amount)));
    }
    allowances.push(Line::new("Total Allowances", format_inr(result.total_allowances)));
    print_lines("Allowances", allowances);

    let mut deductions: Vec<Line> = result
        .deductions
        .items()
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(label, amount)| Line::new(*label, format_inr(*amount)))
        .collect();
    deductions.push(Line::new("Total Deductions", format_inr(result.total_deductions)));
    print_lines("Deductions", deductions);

    println!();
    println!("Net Salary: {}", format_inr(result.net_salary));
    print_warnings(&result.warnings);
}

pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}
