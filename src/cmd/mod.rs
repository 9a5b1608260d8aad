pub mod cities;
pub mod form16;
pub mod invest;
pub mod loan;
pub mod payscale;
pub mod payslip;
pub mod pension;
pub mod schema;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::{
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style,
    },
    Table, Tabled,
};

/// Read a JSON input record from a file (or stdin with "-")
pub fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}

fn read_from_stdin<T: DeserializeOwned>() -> anyhow::Result<T> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe JSON to stdin.");
    }

    let input = serde_json::from_slice(&buffer)?;
    Ok(input)
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write rows as CSV to stdout
pub fn write_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Label/value row for two-column summaries
#[derive(Debug, Clone, Tabled)]
pub struct Line {
    #[tabled(rename = "Item")]
    pub label: String,
    #[tabled(rename = "Amount")]
    pub value: String,
}

impl Line {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Line {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub fn print_lines(title: &str, lines: Vec<Line>) {
    println!();
    println!("{}", title);
    let table = Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

/// Table rows right-aligned, as used by the breakdown views
pub fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}
