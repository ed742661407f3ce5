//! Conversion configuration.
//!
//! Holds the source and destination paths together with the output
//! options selected on the command line.

use crate::constants::{DEFAULT_DESTINATION_PATH, DEFAULT_SOURCE_PATH};
use crate::models::WriteMode;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// GTFS stops file to read
    pub source_path: PathBuf,

    /// JSON file to create or replace
    pub destination_path: PathBuf,

    /// Buffered or streaming serialization
    pub write_mode: WriteMode,

    /// Read and project every row but skip writing
    pub dry_run: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            destination_path: PathBuf::from(DEFAULT_DESTINATION_PATH),
            write_mode: WriteMode::Buffered,
            dry_run: false,
        }
    }
}

impl ConvertConfig {
    /// Create configuration for an explicit source and destination
    pub fn new(source_path: impl Into<PathBuf>, destination_path: impl Into<PathBuf>) -> Self {
        let config = Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            ..Self::default()
        };
        debug!(
            "Configured conversion {} -> {}",
            config.source_path.display(),
            config.destination_path.display()
        );
        config
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Serialize records one at a time instead of collecting them first
    pub fn with_streaming(self) -> Self {
        self.with_write_mode(WriteMode::Streaming)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
