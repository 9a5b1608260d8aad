//! Cities command - HRA categories and metro status

use crate::cmd::print_table;
use crate::core::tables::CITIES;
use clap::Args;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct CitiesCommand {}

#[derive(Tabled)]
struct CityRow {
    #[tabled(rename = "City")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Metro")]
    metro: &'static str,
}

impl CitiesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<CityRow> = CITIES
            .iter()
            .map(|c| CityRow {
                name: c.name,
                category: c.category.to_string(),
                metro: if c.is_metro { "yes" } else { "" },
            })
            .collect();
        print_table(&rows);
        println!("Cities not listed use category Z (non-metro).");
        Ok(())
    }
}
