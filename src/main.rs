use anyhow::Context;
use clap::Parser;
use gtfs_stops::StopsConverter;
use gtfs_stops::cli::{Args, print_summary, setup_logging};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let config = args.to_config();
    let source = config.source_path.display().to_string();

    let result = StopsConverter::new(config)
        .run()
        .with_context(|| format!("Failed to convert {}", source));

    match result {
        Ok(stats) => {
            if !args.quiet {
                print_summary(&stats);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
