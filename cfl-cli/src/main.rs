//! Cfluviurrh - command-line interpreter
//!
//! `cfluviurrh <program-file> <input-file> <output-file>`

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use cfl_runtime::{
    CfluviurrhRuntime, Consent, ConsoleEmoter, RuntimeConfig, create_output, open_input,
};
use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cfluviurrh")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.10.19")]
#[command(about = "Cfluviurrh - a register machine that needs you to feel things", long_about = None)]
struct Cli {
    /// Program file
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// File read one byte at a time by `<`
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File written one byte at a time by `>`
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Runtime configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print execution statistics as JSON on stderr
    #[arg(long)]
    stats: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

/// Logs vão para stderr; stdout pertence ao emoter
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };

    let mut runtime = CfluviurrhRuntime::new(config);
    runtime.load_file(&cli.program)?;

    let input = open_input(&cli.input)?;
    let output = create_output(&cli.output)?;

    let mut emoter = ConsoleEmoter::new(io::stdin().lock(), io::stdout());
    if emoter.obtain_consent()? == Consent::Declined {
        return Ok(());
    }

    let report = runtime.run(input, output, &mut emoter)?;
    tracing::debug!(acknowledged = emoter.acknowledged(), "emoter released");

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&report.stats)?);
    }

    Ok(())
}
