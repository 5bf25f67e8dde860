//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Ladder - sorts instrument books ascending by their ordering key
#[derive(Parser)]
#[command(name = "ladder")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sort and print the sample equity book, cheapest share first
    Equities,

    /// Sort and print the sample treasury book, lowest yield first
    FixedIncome,

    /// Sort and print both sample books (the default)
    All,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One display line per instrument under a heading
    #[default]
    Text,
    /// JSON format
    Json,
}
