//! prom-builder CLI Binary
//!
//! Pre-start build step: merges configuration fragments into the target
//! Prometheus config and resolves environment placeholders.

use clap::Parser;
use prom_builder::cli::{Cli, RunContext};
use prom_builder::environment::{load_dotenv, EnvironmentSnapshot};
use prom_builder::logging::{init_logging, LoggingConfig};
use prom_builder::settings::Settings;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // The dotenv file can carry PROMBUILD_* settings, so it goes first
    let dotenv = load_dotenv(&cli.env_file);

    let settings = match Settings::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", prom_builder::cli::map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&build_logging_config(&cli, &settings))) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }
    dotenv.report();

    info!("prom-builder starting");

    let context = RunContext::new(settings, EnvironmentSnapshot::capture());
    match context.execute(&cli) {
        Ok(confirmation) => {
            info!("Build completed successfully");
            if let Some(line) = confirmation {
                println!("{}", line);
            }
        }
        Err(e) => {
            error!("Build failed: {}", e);
            eprintln!("{}", prom_builder::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from settings and CLI args.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: &Settings) -> LoggingConfig {
    let mut config = settings.logging.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
