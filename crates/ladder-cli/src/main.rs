//! Ladder CLI - sorts and prints the sample instrument books.
//!
//! # Usage
//!
//! ```bash
//! # Print both sample books, each sorted ascending
//! ladder
//!
//! # Print just the equity book, cheapest share first
//! ladder equities
//!
//! # Print the treasury book as JSON, lowest yield first
//! ladder fixed-income --format json
//! ```

use anyhow::Result;
use clap::Parser;

mod book;
mod cli;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; mandated output lines go to stdout, logs to stderr
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command.unwrap_or(Commands::All) {
        Commands::Equities => {
            let book = book::equities();
            tracing::debug!("sorting {} equities", book.len());
            output::print_book("Sorted Equities:", &book, cli.format)?;
        }
        Commands::FixedIncome => {
            let book = book::treasuries();
            tracing::debug!("sorting {} fixed income instruments", book.len());
            output::print_book("Sorted Fixed Income:", &book, cli.format)?;
        }
        Commands::All => {
            let equities = book::equities();
            let treasuries = book::treasuries();
            tracing::debug!(
                "sorting {} equities and {} fixed income instruments",
                equities.len(),
                treasuries.len()
            );
            output::print_all(&equities, &treasuries, cli.format)?;
        }
    }

    Ok(())
}
