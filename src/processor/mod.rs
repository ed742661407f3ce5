//! Conversion engine.
//!
//! Drives a single pass over a GTFS stops file: the reader projects each row
//! onto the stop fields and the writer serializes the resulting records as a
//! JSON array.

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{reader::StopsReader, writer::JsonWriter};

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::models::{ConversionStats, WriteMode};

use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Converts one stops file into one JSON document
#[derive(Debug, Clone, Default)]
pub struct StopsConverter {
    config: ConvertConfig,
}

impl StopsConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Run the conversion.
    ///
    /// Header problems are detected before anything is written. Any failure
    /// leaves the destination as it was before the call.
    pub fn run(&self) -> Result<ConversionStats> {
        let start_time = Instant::now();
        let source = &self.config.source_path;
        let destination = &self.config.destination_path;

        info!(
            "Converting {} -> {}",
            source.display(),
            destination.display()
        );

        let reader = StopsReader::open(source)?;

        let (rows, bytes_written) = if self.config.dry_run {
            info!("Dry run, output will not be written");
            (reader.for_each_stop(|_| Ok(()))?, 0)
        } else {
            let writer = JsonWriter::new(destination);
            match self.config.write_mode {
                WriteMode::Buffered => {
                    let stops = reader.read_all()?;
                    let bytes = writer.write_all(&stops)?;
                    (stops.len(), bytes)
                }
                WriteMode::Streaming => {
                    writer.write_streaming(|emit| reader.for_each_stop(emit))?
                }
            }
        };

        let stats = ConversionStats {
            rows_read: rows,
            records_written: if self.config.dry_run { 0 } else { rows },
            source_path: source.clone(),
            destination_path: destination.clone(),
            bytes_written,
            elapsed: start_time.elapsed(),
            dry_run: self.config.dry_run,
        };

        info!(
            "Converted {} stops in {}ms",
            stats.rows_read,
            stats.elapsed.as_millis()
        );
        Ok(stats)
    }
}

/// Convert `source_path` into a JSON document at `destination_path`
pub fn convert(
    source_path: impl AsRef<Path>,
    destination_path: impl AsRef<Path>,
) -> Result<ConversionStats> {
    let config = ConvertConfig::new(source_path.as_ref(), destination_path.as_ref());
    StopsConverter::new(config).run()
}
