//! GTFS Stops Library
//!
//! Converts a GTFS `stops.txt` file into a pretty-printed JSON array holding
//! nine fields per stop, copied verbatim from the source.
//!
//! This library provides tools for:
//! - Resolving the stop columns declared by a CSV header in any order
//! - Projecting each data row onto a fixed-shape [`StopRecord`]
//! - Writing the document atomically, either buffered or streamed
//!
//! ```no_run
//! let stats = gtfs_stops::convert("stops.txt", "stops.json")?;
//! println!("{} stops written", stats.records_written);
//! # Ok::<(), gtfs_stops::StopsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod processor;

// Re-export commonly used types
pub use config::ConvertConfig;
pub use error::{Result, StopsError};
pub use header::{HeaderIndex, SourceRow, project_row};
pub use models::{ConversionStats, StopRecord, WriteMode};
pub use processor::{StopsConverter, convert};
