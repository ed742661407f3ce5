//! Core data structures for stop conversion.
//!
//! Defines the fixed-shape output record and the statistics reported
//! after a conversion run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A single stop as written to the JSON document.
///
/// Field order here is the key order of the serialized object. Every value is
/// the source text copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_code: String,
    pub stop_name: String,
    pub stop_lat: String,
    pub stop_lon: String,
    pub stop_url: String,
    pub location_type: String,
    pub parent_station: String,
    pub wheelchair_boarding: String,
}

/// How the output document is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Collect every record in memory, then serialize the whole array
    #[default]
    Buffered,
    /// Serialize each record as soon as its row is projected
    Streaming,
}

/// Conversion statistics
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    pub rows_read: usize,
    pub records_written: usize,
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub bytes_written: u64,
    pub elapsed: Duration,
    pub dry_run: bool,
}

impl ConversionStats {
    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
