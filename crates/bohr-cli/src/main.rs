//! Bohr CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use bohr_cli::{Args, error_adapter::render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Bohr");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = bohr_cli::run(&args) {
        let report = render_report(&err, &miette::GraphicalReportHandler::new());

        // The report reaches the user even with logging turned off
        eprintln!("{report}");
        error!("Run failed: {err}");

        process::exit(1);
    }

    info!("Completed successfully");
}
