use anyhow::{Context, Result};
use clap::Parser;
use promedio::{
    cli::{Cli, OutputFormat},
    csv_output, input, json_output,
    summary::Summary,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Collect raw input text from positional values, --file, or stdin
fn read_input(args: &Cli) -> Result<String> {
    if !args.values.is_empty() {
        return Ok(args.values.join(" "));
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read values from stdin")?;
    Ok(buffer)
}

/// Print the report in the requested format
fn print_report(summary: &Summary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", json_output::render(summary)?),
        OutputFormat::Csv => print!("{}", csv_output::render(summary)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let text = read_input(&args)?;
    let values = input::parse_values(&text)?;
    tracing::debug!(count = values.len(), "parsed input values");

    let summary = Summary::compute(&values)?;
    print_report(&summary, args.format)?;

    Ok(())
}
