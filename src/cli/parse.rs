//! CLI parse: clap types for prom-builder. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Assemble a Prometheus configuration from fragments and the environment
#[derive(Parser, Debug)]
#[command(name = "prom-builder", version)]
#[command(about = "Merge configuration fragments into a Prometheus config and resolve ${ENV} placeholders")]
pub struct Cli {
    /// Base configuration file, rewritten in place
    pub target_yaml_file: PathBuf,

    /// Population JSON file, or "-" to only resolve placeholders in the target
    pub population_source: String,

    /// Dotenv file loaded before the environment is captured
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Skip sequence elements already present when merging (makes re-runs idempotent)
    #[arg(long)]
    pub dedupe_sequences: bool,

    /// Settings file path (default: ./prom-builder.toml when present)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
