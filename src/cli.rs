//! CLI argument parsing for promedio

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the statistics report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "promedio")]
#[command(version)]
#[command(about = "Descriptive statistics (mean, variance, standard deviation) for numeric data", long_about = None)]
pub struct Cli {
    /// Read values from a file instead of the command line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Values to summarize (reads stdin when neither values nor --file given)
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,
}
