//! Pension command - retirement benefit statement

use crate::calculators::{calculate_pension, PensionInput, PensionResult};
use crate::cmd::payslip::print_warnings;
use crate::cmd::{print_json, print_lines, read_input, Line};
use crate::core::format_inr;
use crate::core::input::{parse_amount, parse_count, parse_date, InputError};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PensionCommand {
    /// JSON file with the pension input ("-" for stdin); replaces the flags below
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Employee name
    #[arg(short, long)]
    name: Option<String>,

    /// Last basic pay drawn
    #[arg(short, long, value_parser = parse_amount)]
    basic_pay: Option<Decimal>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    dob: Option<NaiveDate>,

    /// Date of joining (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    doj: Option<NaiveDate>,

    /// Date of retirement (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    retirement: Option<NaiveDate>,

    /// Earned leave balance in days
    #[arg(short, long, value_parser = parse_count, default_value = "0")]
    earned_leave: u32,

    /// DA rate in percent; defaults to the rate for the retirement year
    #[arg(short, long, value_parser = parse_amount)]
    da_rate: Option<Decimal>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl PensionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = match &self.input {
            Some(path) => read_input(path)?,
            None => self.input_from_flags()?,
        };
        let result = calculate_pension(&input)?;

        if self.json {
            print_json(&result)
        } else {
            print_statement(&result);
            Ok(())
        }
    }

    fn input_from_flags(&self) -> Result<PensionInput, InputError> {
        Ok(PensionInput {
            name: self.name.clone().unwrap_or_default(),
            basic_pay: self.basic_pay.unwrap_or_default(),
            date_of_birth: self.dob.ok_or(InputError::Missing { field: "dob" })?,
            date_of_joining: self.doj.ok_or(InputError::Missing { field: "doj" })?,
            retirement_date: self
                .retirement
                .ok_or(InputError::Missing { field: "retirement" })?,
            total_earned_leave_days: self.earned_leave,
            da_rate_percent: self.da_rate,
        })
    }
}

fn print_statement(result: &PensionResult) {
    let personal = &result.personal;
    print_lines(
        &format!("PENSION STATEMENT - {}", personal.name),
        vec![
            Line::new("Basic Pay", format_inr(personal.basic_pay)),
            Line::new("Date of Birth", personal.date_of_birth.to_string()),
            Line::new("Date of Joining", personal.date_of_joining.to_string()),
            Line::new("Date of Retirement", personal.retirement_date.to_string()),
            Line::new("Length of Service", personal.service_length.to_string()),
            Line::new("Age at Retirement", personal.age_at_retirement.to_string()),
            Line::new("Earned Leave (days)", personal.total_earned_leave_days.to_string()),
            Line::new("DA Rate", format!("{}%", personal.da_rate)),
            Line::new("CVP Factor", personal.cvp_factor.to_string()),
        ],
    );

    let pension = &result.pension;
    print_lines(
        "Pension",
        vec![
            Line::new("Basic Pension", format_inr(pension.basic_pension)),
            Line::new("Commuted Pension (40%)", format_inr(pension.commuted_pension)),
            Line::new("Commuted Value", format_inr(pension.commuted_value)),
            Line::new("Reduced Pension", format_inr(pension.reduced_pension)),
            Line::new("DA on Pension", format_inr(pension.da_on_pension)),
            Line::new("Net Pension", format_inr(pension.net_pension)),
        ],
    );

    let family = &result.family_pension;
    print_lines(
        "Family Pension",
        vec![
            Line::new("Family Pension (30%)", format_inr(family.family_pension)),
            Line::new("DA on Family Pension", format_inr(family.da_on_family_pension)),
            Line::new("Net Family Pension", format_inr(family.net_family_pension)),
        ],
    );

    let gratuity = &result.gratuity;
    let mut gratuity_lines = vec![
        Line::new("Emoluments (basic pay)", format_inr(gratuity.emoluments)),
        Line::new("Six-monthly Periods", gratuity.six_monthly_periods.to_string()),
        Line::new("Gratuity", format_inr(gratuity.gratuity)),
        Line::new("Net Gratuity", format_inr(gratuity.net_gratuity)),
    ];
    if gratuity.is_limited {
        gratuity_lines.push(Line::new("Limited to", format_inr(gratuity.net_gratuity)));
    }
    print_lines("Gratuity", gratuity_lines);

    let summary = &result.summary;
    print_lines(
        "Summary",
        vec![
            Line::new("Pension in Hand", format_inr(summary.pension_in_hand)),
            Line::new("Family Pension in Hand", format_inr(summary.family_pension_in_hand)),
            Line::new("Leave Encashment", format_inr(summary.leave_encashment)),
            Line::new("Commuted Value", format_inr(summary.commuted_value)),
            Line::new("Retirement Gratuity", format_inr(summary.retirement_gratuity)),
            Line::new("Final Total", format_inr(summary.final_total)),
        ],
    );
    print_warnings(&result.warnings);
}
