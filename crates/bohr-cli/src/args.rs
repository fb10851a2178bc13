//! Command-line argument definitions for the Bohr CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the element, the output path, the
//! configuration file and dataset, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Bohr diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Element to draw
    #[arg(
        default_value = "Hydrogen",
        help = "Element name, symbol, or atomic number"
    )]
    pub query: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to a custom element dataset (TOML `[[element]]` tables)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Print the animation timeline to stdout
    #[arg(long)]
    pub timeline: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
