//! Bohr CLI library
//!
//! This module contains the core CLI logic for the Bohr diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fmt::Write as _, fs};

use log::info;

use bohr::{BohrError, DiagramBuilder, PeriodicTable, timeline::AnimationTimeline};

/// Run the Bohr CLI application
///
/// This function resolves the query to an element, renders its animated
/// diagram and writes the SVG to the output file. With `--timeline`, the
/// start delay of every primitive is printed to stdout as well.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BohrError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset and lookup errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), BohrError> {
    info!(
        query = args.query,
        output_path = args.output;
        "Processing element"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let mut builder = DiagramBuilder::new(app_config);
    if let Some(dataset) = &args.dataset {
        info!(path = dataset; "Loading element dataset");
        let source = fs::read_to_string(dataset)?;
        builder = builder.with_table(PeriodicTable::from_toml_str(&source)?);
    }

    let element = builder.lookup(&args.query)?;

    if args.timeline {
        print!("{}", format_timeline(&builder.schedule(element)));
    }

    let svg = builder.render_svg(element)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Formats a timeline as one `<delay>ms <primitive>` line per primitive, in
/// draw order.
pub fn format_timeline(timeline: &AnimationTimeline) -> String {
    timeline
        .iter()
        .fold(String::new(), |mut out, (id, delay)| {
            let _ = writeln!(out, "{}ms {id}", delay.as_millis());
            out
        })
}

#[cfg(test)]
mod tests {
    use bohr::timeline::{TimingOptions, schedule};

    use super::*;

    #[test]
    fn test_format_timeline() {
        let timeline = schedule(&[1], &TimingOptions::default());

        assert_eq!(
            format_timeline(&timeline),
            "100ms nucleus\n\
             100ms shell[0]\n\
             700ms electron[0][0]\n\
             700ms name-label\n\
             850ms summary-label\n"
        );
    }
}
