use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use constel_emitter::{emit_json, emit_yaml};
use std::fs;
use std::path::PathBuf;

/// Constel CLI - translate constant-definition files to YAML or JSON
#[derive(Parser, Debug)]
#[command(name = "constel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input .cst file
    input: PathBuf,

    /// Output format (yaml, json)
    #[arg(short, long, default_value = "yaml")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read input file '{}'", cli.input.display()))?;

    let document = constel_parser::parse(&source)?;

    let output = match cli.format.as_str() {
        "yaml" => emit_yaml(&document)?,
        "json" => emit_json(&document)?,
        other => {
            return Err(anyhow!("unknown format: {} (expected yaml or json)", other));
        }
    };

    match &cli.out {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("cannot write output file '{}'", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
