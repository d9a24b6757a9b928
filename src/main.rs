// SPDX-License-Identifier: PMPL-1.0-or-later

//! content-seed: generate upsert SQL for the `content` table from i18n files
//!
//! Run from the site root with no arguments to write
//! `scripts/populate-content.sql` from `public/locales/*/common.json`.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use content_seed::{report, sql, verify, SeedConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "content-seed")]
#[command(version)]
#[command(about = "Generate content-table upsert SQL from i18n locale files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Site root that locale paths and the output path are relative to
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// YAML or JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the locale list (e.g. "sr,en,de,it")
    #[arg(long, global = true, value_delimiter = ',')]
    locales: Option<Vec<String>>,

    /// Override the section list
    #[arg(long, global = true, value_delimiter = ',')]
    sections: Option<Vec<String>>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only errors and the final summary
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the upsert script (default)
    Generate(GenerateArgs),

    /// Split an existing script into smaller statements
    Split {
        /// Script to split
        #[arg(value_name = "SQL_FILE")]
        script: PathBuf,

        /// Rows per statement
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// Check locale files parse and compare key coverage
    Verify {
        /// Locale whose keys count as complete
        #[arg(long)]
        reference: Option<String>,

        /// Write the verification result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Output script, relative to the root
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write chunk files with this many rows per statement
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("content_seed={}", level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<SeedConfig> {
    let mut config = match &cli.config {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::default(),
    };
    if let Some(locales) = &cli.locales {
        config.locales = locales.clone();
    }
    if let Some(sections) = &cli.sections {
        config.sections = sections.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = load_config(&cli)?;

    match cli.command {
        None => run_generate(&mut config, &cli.root, cli.quiet, GenerateArgs::default()),
        Some(Commands::Generate(args)) => run_generate(&mut config, &cli.root, cli.quiet, args),
        Some(Commands::Split { script, chunk_size }) => {
            if let Some(size) = chunk_size {
                config.chunk_size = size;
            }
            config.validate()?;
            let written = sql::split_file(&script, config.chunk_size)?;
            println!("Split {} into {} chunks", script.display(), written.len());
            for path in &written {
                println!("Written: {}", path.display());
            }
            Ok(())
        }
        Some(Commands::Verify { reference, json }) => {
            config.validate()?;
            let result = verify::run(&config, &cli.root, reference.as_deref())?;
            verify::print_report(&result);
            if let Some(path) = json {
                report::write_json(&result, &path)?;
                println!("Verification saved to: {}", path.display());
            }
            if !result.is_ok() {
                bail!("{} locale file(s) are not valid JSON", result.invalid_count());
            }
            Ok(())
        }
    }
}

fn run_generate(
    config: &mut SeedConfig,
    root: &Path,
    quiet: bool,
    args: GenerateArgs,
) -> Result<()> {
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(size) = args.chunk_size {
        config.chunk_size = size;
    }
    config.validate()?;

    let (extracted, outcome) = report::generate(config, root, args.chunk_size.is_some())?;
    report::print_summary(&extracted, &outcome, quiet);

    if let Some(path) = args.report {
        report::write_run_report(&extracted, &path)?;
        println!("Report saved to: {}", path.display());
    }
    Ok(())
}
