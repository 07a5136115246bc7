//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// REST vs GraphQL API latency benchmarking tool
#[derive(Parser, Debug)]
#[command(name = "api-bench")]
#[command(version)]
#[command(about = "Benchmark a REST suite against a GraphQL suite and compare latencies")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run both benchmark suites and compare
    Run(RunArgs),

    /// View archived benchmark runs
    Results(ResultsArgs),

    /// Write an example configuration file
    Init(InitArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// REST test definitions file (JSON or YAML)
    #[arg(long)]
    pub rest: Option<PathBuf>,

    /// GraphQL test definitions file (JSON or YAML)
    #[arg(long)]
    pub graphql: Option<PathBuf>,

    /// Configuration file (default: standard locations)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-call timeout in seconds (default: from config)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Where to write the comparison JSON (default: from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the comparison file and the run archive
    #[arg(long)]
    pub no_save: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for the results command
#[derive(Parser, Debug)]
pub struct ResultsArgs {
    /// Run ID to show (default: latest)
    #[arg(short, long)]
    pub run: Option<String>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Export per-call results to a file (.json or .csv)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(default_value = "api-bench.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
