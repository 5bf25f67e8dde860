//! Output formatting utilities.

use anyhow::Result;
use serde::Serialize;

use ladder_core::{Asset, Equity, FixedIncome, Ladder};

use crate::cli::OutputFormat;

/// Sorts one book and prints it in the requested format.
pub fn print_book<T>(heading: &str, book: &Ladder<T>, format: OutputFormat) -> Result<()>
where
    T: Asset + Clone + Serialize,
{
    let sorted = book.sorted();
    match format {
        OutputFormat::Text => {
            println!("{}", heading);
            for rung in &sorted {
                println!("{}", rung);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        }
    }
    Ok(())
}

/// Sorts both sample books and prints them as one document.
pub fn print_all(
    equities: &Ladder<Equity>,
    treasuries: &Ladder<FixedIncome>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_book("Sorted Equities:", equities, format)?;
            println!();
            print_book("Sorted Fixed Income:", treasuries, format)?;
        }
        OutputFormat::Json => {
            let document = serde_json::json!({
                "equities": equities.sorted(),
                "fixed_income": treasuries.sorted(),
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}
