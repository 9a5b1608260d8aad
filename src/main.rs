mod calculators;
mod cmd;
mod core;
mod tax;

use clap::{Parser, Subcommand};

/// Salary, pension, tax and savings calculators for Indian government employees
#[derive(Parser, Debug)]
#[command(name = "paycalc", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Monthly payslip: allowances, deductions and net salary
    Payslip(cmd::payslip::PayslipCommand),
    /// Loan EMI and total interest
    Loan(cmd::loan::LoanCommand),
    /// Maximum loan an income can support
    Eligibility(cmd::loan::EligibilityCommand),
    /// Systematic investment plan projection
    Sip(cmd::invest::SipCommand),
    /// Fixed deposit maturity
    Fd(cmd::invest::FdCommand),
    /// Cooperative society share dividend, contributions and member loan
    Cooperative(cmd::invest::CooperativeCommand),
    /// Pension, family pension, gratuity and leave encashment on retirement
    Pension(cmd::pension::PensionCommand),
    /// Annual income tax computation (Form 16)
    Form16(cmd::form16::Form16Command),
    /// 7th CPC pay matrix with 3% annual increments
    Payscale(cmd::payscale::PayScaleCommand),
    /// List cities with their HRA category
    Cities(cmd::cities::CitiesCommand),
    /// Print the JSON schema or field list of an input record
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Payslip(cmd) => cmd.exec(),
        Command::Loan(cmd) => cmd.exec(),
        Command::Eligibility(cmd) => cmd.exec(),
        Command::Sip(cmd) => cmd.exec(),
        Command::Fd(cmd) => cmd.exec(),
        Command::Cooperative(cmd) => cmd.exec(),
        Command::Pension(cmd) => cmd.exec(),
        Command::Form16(cmd) => cmd.exec(),
        Command::Payscale(cmd) => cmd.exec(),
        Command::Cities(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
