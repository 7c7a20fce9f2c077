//! mdrich CLI - convert markup reports and analyze their source data
//!
//! Commands:
//!   convert   Convert a document and display its block structure
//!   validate  Check a document for lossy or unterminated constructs
//!   stats     Show document statistics
//!   analyze   Product, sales, pricing and packaging analysis

mod analyze;
mod config;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mdrich_core::Converter;

use crate::analyze::AnalyzeInputs;
use crate::config::Config;
use crate::render::DocumentStats;

#[derive(Parser)]
#[command(name = "mdrich", version, about = "Markup report converter and data analyzer")]
struct Cli {
    /// Config file (defaults to ./mdrich.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a document and display its block structure
    Convert {
        file: PathBuf,
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
        /// Show block content
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check a document for lossy or unterminated constructs
    Validate {
        file: PathBuf,
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },
    /// Show document statistics
    Stats { file: PathBuf },
    /// Analyze product, sales, competitor and parts sheets
    Analyze {
        /// Parts catalog (CSV or workbook)
        #[arg(long)]
        parts: Option<PathBuf>,
        /// Sales history (CSV or workbook)
        #[arg(long)]
        sales: Option<PathBuf>,
        /// Competitor listings (CSV or workbook)
        #[arg(long)]
        crawler: Option<PathBuf>,
        /// Quotation sheet (xlsx workbook or CSV export)
        #[arg(long)]
        quotation: Option<PathBuf>,
        /// Product dimensions, overriding the quotation (e.g. 41x137x51)
        #[arg(long)]
        dimensions: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    log::debug!("config: {:?}", config);

    match cli.command {
        Command::Convert {
            file,
            json,
            verbose,
        } => cmd_convert(&file, &config, json, verbose),
        Command::Validate { file, json } => cmd_validate(&file, &config, json),
        Command::Stats { file } => cmd_stats(&file, &config),
        Command::Analyze {
            parts,
            sales,
            crawler,
            quotation,
            dimensions,
        } => {
            let inputs = AnalyzeInputs {
                parts,
                sales,
                crawler,
                quotation,
                dimensions,
            };
            print!("{}", analyze::run_analysis(&inputs, &config)?);
            Ok(())
        }
    }
}

fn read_input(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file.display()))
}

// =============================================================================
// Convert Command
// =============================================================================

fn cmd_convert(file: &Path, config: &Config, json: bool, verbose: bool) -> Result<()> {
    let input = read_input(file)?;
    let converter = Converter::new(config.convert_options());
    let result = converter.convert_with_diagnostics(&input);

    for diagnostic in result.diagnostics.iter() {
        eprintln!("warning: {}", diagnostic);
    }

    if json {
        println!("{}", render::to_json(&result.document)?);
    } else if verbose {
        println!("{}", render::verbose(&result.document));
    } else {
        println!("{}", render::summary(&result.document));
    }
    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(file: &Path, config: &Config, json: bool) -> Result<()> {
    let input = read_input(file)?;
    let converter = Converter::new(config.convert_options());
    let result = converter.convert_with_diagnostics(&input);

    if json {
        let diagnostics: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| {
                serde_json::json!({
                    "message": d.message,
                    "line": d.line,
                    "kind": format!("{:?}", d.kind),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({"valid": result.is_clean(), "diagnostics": diagnostics})
        );
    } else if result.is_clean() {
        println!("Valid: no issues found");
    } else {
        eprintln!("Invalid: {} issue(s) found", result.diagnostics.len());
        for diagnostic in result.diagnostics.iter() {
            eprintln!("  - {}", diagnostic);
        }
    }

    if !result.is_clean() {
        bail!("{} issue(s) found", result.diagnostics.len());
    }
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(file: &Path, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let converter = Converter::new(config.convert_options());
    let result = converter.convert_with_diagnostics(&input);
    let stats = DocumentStats::from_document(&result.document, &input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Bullet items:   {}", stats.bullets);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Rules:          {}", stats.rules);
    println!("  Diagram lines:  {}", stats.diagram_lines);
    println!("  Tables:         {}", stats.tables);
    println!("  Table cells:    {}", stats.table_cells);
    println!("  Bold runs:      {}", stats.bold_runs);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
    println!();
    println!("Issues:         {}", result.diagnostics.len());

    Ok(())
}
