//! Schema command - print expected JSON input formats

use crate::calculators::PensionInput;
use crate::core::{InputField, PayslipInput};
use crate::tax::TaxInput;
use clap::{Args, ValueEnum};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Input record to describe
    #[arg(value_enum)]
    record: SchemaRecord,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaRecord {
    Payslip,
    Pension,
    Form16,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input record
    JsonSchema,
    /// Field names with required/optional and descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => {
                self.print_fields();
                Ok(())
            }
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = match self.record {
            SchemaRecord::Payslip => schema_for!(PayslipInput),
            SchemaRecord::Pension => schema_for!(PensionInput),
            SchemaRecord::Form16 => schema_for!(TaxInput),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) {
        let (title, fields) = match self.record {
            SchemaRecord::Payslip => ("Payslip Input", PayslipInput::input_fields()),
            SchemaRecord::Pension => ("Pension Input", PensionInput::input_fields()),
            SchemaRecord::Form16 => ("Form 16 Input", TaxInput::input_fields()),
        };
        print_field_list(title, fields);
    }
}

fn print_field_list(title: &str, fields: &[InputField]) {
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();
    for field in fields {
        let req = if field.required { "required" } else { "optional" };
        println!("{:24} ({:8})  {}", field.name, req, field.description);
    }
}
