//! Application constants for the stops converter
//!
//! Column names, default paths and output formatting shared by the library
//! and the command-line front end.

// =============================================================================
// Stop Columns
// =============================================================================

/// Columns copied from every stop row, in output order
pub const STOP_FIELDS: [&str; 9] = [
    "stop_id",
    "stop_code",
    "stop_name",
    "stop_lat",
    "stop_lon",
    "stop_url",
    "location_type",
    "parent_station",
    "wheelchair_boarding",
];

// =============================================================================
// Default Paths
// =============================================================================

/// Source file read when no path is given
pub const DEFAULT_SOURCE_PATH: &str = "stops.txt";

/// Destination file written when no path is given
pub const DEFAULT_DESTINATION_PATH: &str = "stops.json";

// =============================================================================
// Output Format
// =============================================================================

/// Indentation used for each nesting level of the JSON document
pub const JSON_INDENT: &[u8] = b"    ";

/// Field delimiter of the source file
pub const SOURCE_DELIMITER: u8 = b',';

/// Prefix for temporary files created next to the destination
pub const TEMP_FILE_PREFIX: &str = ".stops-";

/// Mode requested for a newly created output file, before the umask applies
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o666;
