//! Pay scale command - 7th CPC pay matrix with 3% annual increments

use crate::calculators::payscale::INCREMENT_YEARS;
use crate::calculators::{all_pay_scales, pay_scale, PayScale};
use crate::cmd::{print_json, print_table, write_csv};
use crate::core::format_inr;
use crate::core::input::parse_count;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct PayScaleCommand {
    /// Show one level's year-by-year increments (1-20)
    #[arg(short, long, value_parser = parse_count)]
    level: Option<u32>,

    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV
    #[arg(long)]
    csv: bool,
}

#[derive(Tabled)]
struct LevelRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Level")]
    level: u8,
    #[tabled(rename = "Grade Pay")]
    grade_pay: String,
    #[tabled(rename = "Base Pay")]
    base_pay: String,
    #[tabled(rename = "After 20 Years")]
    current_pay: String,
}

#[derive(Tabled)]
struct IncrementRow {
    #[tabled(rename = "Year")]
    year: usize,
    #[tabled(rename = "Pay")]
    pay: String,
}

#[derive(Serialize)]
struct Increment {
    year: usize,
    pay: Decimal,
}

impl PayScaleCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.level {
            Some(level) => self.show_level(&pay_scale(level)),
            None => self.show_all(&all_pay_scales()),
        }
    }

    fn show_all(&self, scales: &[PayScale]) -> anyhow::Result<()> {
        if self.json {
            return print_json(&scales);
        }
        if self.csv {
            let mut rows = vec![csv_header()];
            rows.extend(scales.iter().map(csv_row));
            return write_csv(&rows);
        }

        let rows: Vec<LevelRow> = scales
            .iter()
            .map(|s| LevelRow {
                id: s.id.clone(),
                level: s.level,
                grade_pay: s.grade_pay.clone(),
                base_pay: format_inr(s.base_pay),
                current_pay: format_inr(s.current_pay),
            })
            .collect();
        println!();
        println!("7TH CPC PAY MATRIX");
        print_table(&rows);
        Ok(())
    }

    fn show_level(&self, scale: &PayScale) -> anyhow::Result<()> {
        if self.json {
            return print_json(scale);
        }
        // year 0 is the base pay
        let increments: Vec<Increment> = std::iter::once(scale.base_pay)
            .chain(scale.increments.iter().copied())
            .enumerate()
            .map(|(year, pay)| Increment { year, pay })
            .collect();
        if self.csv {
            return write_csv(&increments);
        }

        let rows: Vec<IncrementRow> = increments
            .iter()
            .map(|i| IncrementRow {
                year: i.year,
                pay: format_inr(i.pay),
            })
            .collect();

        println!();
        println!(
            "PAY SCALE {} (level {}, grade pay {})",
            scale.id, scale.level, scale.grade_pay
        );
        print_table(&rows);
        Ok(())
    }
}

fn csv_header() -> Vec<String> {
    let mut header: Vec<String> = ["id", "level", "grade_pay", "base_pay"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    header.extend((1..=INCREMENT_YEARS).map(|year| format!("year_{}", year)));
    header
}

/// Flat CSV record: one column per increment year
fn csv_row(scale: &PayScale) -> Vec<String> {
    let mut row = vec![
        scale.id.clone(),
        scale.level.to_string(),
        scale.grade_pay.clone(),
        scale.base_pay.to_string(),
    ];
    row.extend(scale.increments.iter().map(|p| p.to_string()));
    row
}
