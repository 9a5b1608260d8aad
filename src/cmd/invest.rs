//! Savings commands - SIP, fixed deposit and cooperative society returns

use crate::calculators::sip::{SipMonth, SipYear};
use crate::calculators::{
    calculate_cooperative, calculate_fd, calculate_sip, Compounding, CooperativeInput, FdInput,
    SipPlan,
};
use crate::cmd::loan::loan_lines;
use crate::cmd::{print_json, print_lines, print_table, write_csv, Line};
use crate::core::format_inr;
use crate::core::input::parse_amount;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct SipCommand {
    /// Monthly investment
    #[arg(short, long, value_parser = parse_amount, default_value = "5000")]
    monthly: Decimal,

    /// Expected annual return in percent
    #[arg(short, long = "return", value_parser = parse_amount, default_value = "12")]
    expected_return: Decimal,

    /// Investment period in years
    #[arg(short, long, value_parser = parse_amount, default_value = "10")]
    years: Decimal,

    /// Yearly increase of the monthly investment in percent
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    step_up: Decimal,

    /// Show the monthly breakdown instead of the yearly one
    #[arg(long)]
    monthly_view: bool,

    /// Output as JSON instead of formatted text
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output the breakdown as CSV
    #[arg(long)]
    csv: bool,
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Invested")]
    investment: String,
    #[tabled(rename = "Total Invested")]
    total_invested: String,
    #[tabled(rename = "Returns")]
    returns: String,
    #[tabled(rename = "Cumulative Returns")]
    cumulative_returns: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&SipYear> for YearRow {
    fn from(row: &SipYear) -> Self {
        YearRow {
            year: row.year,
            investment: format_inr(row.investment),
            total_invested: format_inr(row.total_invested),
            returns: format_inr(row.returns),
            cumulative_returns: format_inr(row.cumulative_returns),
            balance: format_inr(row.balance),
        }
    }
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Total Invested")]
    total_invested: String,
    #[tabled(rename = "Returns")]
    returns: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&SipMonth> for MonthRow {
    fn from(row: &SipMonth) -> Self {
        MonthRow {
            month: row.month,
            year: row.year,
            investment: format_inr(row.investment),
            total_invested: format_inr(row.total_invested),
            returns: format_inr(row.returns),
            balance: format_inr(row.balance),
        }
    }
}

impl SipCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_sip(&SipPlan {
            monthly_investment: self.monthly,
            expected_annual_return_percent: self.expected_return,
            years: self.years,
            step_up_percent: self.step_up,
        });

        if self.json {
            return print_json(&result);
        }
        if self.csv {
            return if self.monthly_view {
                write_csv(&result.monthly_breakdown)
            } else {
                write_csv(&result.yearly_breakdown)
            };
        }

        let mut title = format!(
            "SIP ({} a month at {}% for {} years",
            format_inr(self.monthly),
            self.expected_return,
            self.years
        );
        if self.step_up > Decimal::ZERO {
            title.push_str(&format!(", {}% annual step-up", self.step_up));
        }
        title.push(')');

        print_lines(
            &title,
            vec![
                Line::new("Total Invested", format_inr(result.total_invested)),
                Line::new("Wealth Gained", format_inr(result.wealth_gained)),
                Line::new("Future Value", format_inr(result.future_value)),
            ],
        );

        println!();
        if self.monthly_view {
            let rows: Vec<MonthRow> = result.monthly_breakdown.iter().map(MonthRow::from).collect();
            print_table(&rows);
        } else {
            let rows: Vec<YearRow> = result.yearly_breakdown.iter().map(YearRow::from).collect();
            print_table(&rows);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CompoundingArg {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl From<CompoundingArg> for Compounding {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::Annually => Compounding::Annually,
            CompoundingArg::SemiAnnually => Compounding::SemiAnnually,
            CompoundingArg::Quarterly => Compounding::Quarterly,
            CompoundingArg::Monthly => Compounding::Monthly,
        }
    }
}

#[derive(Args, Debug)]
pub struct FdCommand {
    /// Deposit amount
    #[arg(short, long, value_parser = parse_amount, default_value = "100000")]
    principal: Decimal,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_amount, default_value = "7")]
    rate: Decimal,

    /// Tenure in years
    #[arg(short, long, value_parser = parse_amount, default_value = "5")]
    years: Decimal,

    /// How often interest is compounded
    #[arg(short, long, value_enum, default_value_t = CompoundingArg::Annually)]
    compounding: CompoundingArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl FdCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_fd(&FdInput {
            principal: self.principal,
            annual_rate_percent: self.rate,
            tenure_years: self.years,
            compounding: self.compounding.into(),
        });

        if self.json {
            return print_json(&result);
        }

        print_lines(
            &format!(
                "FIXED DEPOSIT ({}% for {} years, compounded {} times a year)",
                self.rate, self.years, result.periods_per_year
            ),
            vec![
                Line::new("Principal", format_inr(result.principal)),
                Line::new("Interest Earned", format_inr(result.interest_earned)),
                Line::new("Maturity Amount", format_inr(result.maturity_amount)),
            ],
        );
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct CooperativeCommand {
    /// Share capital held
    #[arg(long, value_parser = parse_amount, default_value = "1000")]
    share_capital: Decimal,

    /// Annual dividend on share capital in percent
    #[arg(long, value_parser = parse_amount, default_value = "8")]
    dividend_rate: Decimal,

    /// Membership tenure in years
    #[arg(long, value_parser = parse_amount, default_value = "5")]
    tenure: Decimal,

    /// Monthly contribution (recurring deposit)
    #[arg(long, value_parser = parse_amount, default_value = "500")]
    contribution: Decimal,

    /// Annual interest on contributions in percent
    #[arg(long, value_parser = parse_amount, default_value = "9")]
    interest_rate: Decimal,

    /// Member loan amount (0 for none)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    loan_amount: Decimal,

    /// Annual loan interest rate in percent
    #[arg(long, value_parser = parse_amount, default_value = "12")]
    loan_rate: Decimal,

    /// Loan tenure in years (0 for none)
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    loan_years: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CooperativeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_cooperative(&CooperativeInput {
            share_capital: self.share_capital,
            dividend_rate_percent: self.dividend_rate,
            tenure_years: self.tenure,
            monthly_contribution: self.contribution,
            interest_rate_percent: self.interest_rate,
            loan_amount: self.loan_amount,
            loan_interest_rate_percent: self.loan_rate,
            loan_tenure_years: self.loan_years,
        });

        if self.json {
            return print_json(&result);
        }

        print_lines(
            &format!("COOPERATIVE SOCIETY ({} years)", self.tenure),
            vec![
                Line::new("Share Capital", format_inr(result.share_capital)),
                Line::new("Total Dividend", format_inr(result.total_dividend)),
                Line::new("Contribution Returns", format_inr(result.contribution_returns)),
                Line::new("Maturity Amount", format_inr(result.maturity_amount)),
            ],
        );
        if let Some(loan) = &result.loan {
            print_lines(
                &format!("MEMBER LOAN ({}% for {} years)", self.loan_rate, self.loan_years),
                loan_lines(loan),
            );
        }
        Ok(())
    }
}
