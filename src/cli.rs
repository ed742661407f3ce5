//! Command-line interface components.

use crate::config::ConvertConfig;
use crate::constants::{DEFAULT_DESTINATION_PATH, DEFAULT_SOURCE_PATH};
use crate::models::{ConversionStats, WriteMode};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "gtfs-stops")]
#[command(about = "Convert a GTFS stops.txt file into a JSON document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the GTFS stops file
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE_PATH)]
    pub source_path: PathBuf,

    /// JSON file to create or replace
    #[arg(short, long = "output", value_name = "DEST", default_value = DEFAULT_DESTINATION_PATH)]
    pub output_path: PathBuf,

    /// Write each stop as soon as it is read instead of collecting them first
    #[arg(long)]
    pub stream: bool,

    /// Read and check the source without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the conversion configuration from the parsed arguments
    pub fn to_config(&self) -> ConvertConfig {
        let write_mode = if self.stream {
            WriteMode::Streaming
        } else {
            WriteMode::Buffered
        };

        ConvertConfig::new(&self.source_path, &self.output_path)
            .with_write_mode(write_mode)
            .with_dry_run(self.dry_run)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gtfs_stops={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Print the end-of-run summary
pub fn print_summary(stats: &ConversionStats) {
    if stats.dry_run {
        println!("{}", "Dry run complete".bright_green().bold());
    } else {
        println!("{}", "Conversion complete".bright_green().bold());
    }
    println!(
        "  {} {}",
        "Source:".bright_cyan(),
        stats.source_path.display()
    );
    if !stats.dry_run {
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            stats.destination_path.display()
        );
    }
    println!(
        "  {} {}",
        "Stops:".bright_cyan(),
        stats.rows_read.to_string().bright_white().bold()
    );
    if !stats.dry_run {
        println!(
            "  {} {}",
            "Size:".bright_cyan(),
            ConversionStats::format_size(stats.bytes_written).bright_white()
        );
    }
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.elapsed.as_millis().to_string().bright_white()
    );
}
