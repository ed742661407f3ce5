//! Error handling for stop conversion.
//!
//! Every failure aborts the whole conversion, so each variant carries the
//! path or field needed to produce a useful diagnostic.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StopsError {
    #[error("Source file not found or unreadable: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required field '{field}' {}", describe_line(.line))]
    MissingField { field: String, line: Option<u64> },

    #[error("Failed to write output file: {path}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {path} {}", describe_line(.line))]
    Malformed {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },
}

impl StopsError {
    /// A required column absent from the header line
    pub fn missing_header_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            line: Some(1),
        }
    }

    /// A required column absent from a data row
    pub fn missing_row_field(field: impl Into<String>, line: Option<u64>) -> Self {
        Self::MissingField {
            field: field.into(),
            line,
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Map a CSV reader error, separating I/O trouble from undecodable records
    pub fn from_csv(path: impl Into<PathBuf>, error: csv::Error) -> Self {
        let path = path.into();
        if error.is_io_error() {
            return Self::NotFound {
                path,
                source: error.into(),
            };
        }

        Self::Malformed {
            path,
            line: error.position().map(|pos| pos.line()),
            source: error,
        }
    }
}

fn describe_line(line: &Option<u64>) -> String {
    match *line {
        Some(1) => "in header".to_string(),
        Some(line) => format!("at line {}", line),
        None => "at unknown line".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, StopsError>;
