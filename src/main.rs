//! api-bench - REST vs GraphQL latency comparison tool
//!
//! Runs a configured suite of REST calls and a suite of GraphQL queries
//! against live endpoints, times every call, aggregates per-suite latency
//! statistics, and reports which paradigm answered faster.
//!
//! ## Usage
//!
//! ```bash
//! # Run with test files from the default config locations
//! api-bench run
//!
//! # Explicit test files and a brief summary
//! api-bench run --rest benchmarks/rest_tests.json \
//!               --graphql benchmarks/graphql_tests.json \
//!               --format summary
//!
//! # Show the latest archived run, export per-call rows
//! api-bench results --export run.csv
//!
//! # Write an example config
//! api-bench init
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;

mod benchmark;
mod cli;
mod config;
mod http;
mod models;
mod output;
mod results;
mod utils;

use benchmark::ComparisonRunner;
use cli::Args;
use config::ConfigFile;
use http::HttpTransport;
use output::ResultFormatter;
use results::{ExportFormat, ResultsStorage, StoredRun};
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    init_logger(level);

    match args.command {
        cli::Command::Run(run_args) => run_benchmarks(run_args).await?,
        cli::Command::Results(results_args) => show_results(results_args)?,
        cli::Command::Init(init_args) => init_config(init_args)?,
    }

    Ok(())
}

async fn run_benchmarks(args: cli::RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let rest_path = args.rest.unwrap_or(config.bench.rest_tests);
    let graphql_path = args.graphql.unwrap_or(config.bench.graphql_tests);
    let output_path = args.output.unwrap_or(config.bench.output);
    let timeout_secs = args.timeout.unwrap_or(config.bench.timeout_secs);

    let rest_tests = config::load_rest_tests(&rest_path)?;
    let graphql_tests = config::load_graphql_tests(&graphql_path)?;

    // Reject bad output options now; a long network-bound run must not be
    // thrown away over a typo'd --format
    let formatter = ResultFormatter::from_args(&args.format, args.no_color)?;

    info!(
        "Loaded {} REST and {} GraphQL test cases",
        rest_tests.len(),
        graphql_tests.len()
    );

    let started_at = Utc::now();
    let transport = HttpTransport::with_timeout(timeout_secs)?;
    let runner = ComparisonRunner::new(transport);

    let comparison = runner.run(&rest_tests, &graphql_tests).await?;

    println!("{}", formatter.format_comparison(&comparison));

    if !args.no_save {
        results::save_output(&output_path, &comparison)?;

        let storage = ResultsStorage::default_dir();
        let run = StoredRun::new(started_at, comparison);
        storage.save(&run)?;
    }

    Ok(())
}

fn show_results(args: cli::ResultsArgs) -> Result<()> {
    let formatter = ResultFormatter::from_args(&args.format, false)?;
    let storage = ResultsStorage::default_dir();

    let run = match &args.run {
        Some(id) => storage.load(id)?,
        None => storage
            .latest()?
            .ok_or_else(|| anyhow::anyhow!("No archived runs found"))?,
    };

    println!(
        "Run {} ({} -> {})",
        run.id,
        run.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
        run.completed_at.format("%H:%M:%S UTC")
    );

    println!("{}", formatter.format_comparison(&run.comparison));

    if let Some(path) = &args.export {
        let export_format = ExportFormat::from_extension(path)
            .ok_or_else(|| anyhow::anyhow!("Cannot infer export format from {}", path.display()))?;
        storage.export(&run, path, export_format)?;
        println!("Exported to {}", path.display());
    }

    Ok(())
}

fn init_config(args: cli::InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    ConfigFile::example().save(&args.path)?;
    println!("Wrote example config to {}", args.path.display());

    Ok(())
}
