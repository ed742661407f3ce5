//! Stops file reading
//!
//! Opens the source, validates its header and yields one projected
//! record per data row in file order.

use crate::constants::SOURCE_DELIMITER;
use crate::error::{Result, StopsError};
use crate::header::{HeaderIndex, project_row};
use crate::models::StopRecord;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reader over a GTFS stops file with a validated header
pub struct StopsReader {
    path: PathBuf,
    reader: Reader<File>,
    header: HeaderIndex,
}

impl fmt::Debug for StopsReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopsReader")
            .field("path", &self.path)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl StopsReader {
    /// Open the source and check that its header declares every stop field
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| StopsError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        // Rows shorter than the header must reach projection so they surface
        // as a missing field rather than a length mismatch.
        let mut reader = ReaderBuilder::new()
            .delimiter(SOURCE_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| StopsError::from_csv(path, e))?;
        let header = HeaderIndex::from_headers(headers);
        header.require_stop_fields()?;

        debug!(
            "Opened {} with {} header columns",
            path.display(),
            header.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            header,
        })
    }

    /// Project every data row and hand it to `sink`, returning the row count
    pub fn for_each_stop<F>(self, mut sink: F) -> Result<usize>
    where
        F: FnMut(StopRecord) -> Result<()>,
    {
        let Self {
            path,
            mut reader,
            header,
        } = self;

        let mut record = StringRecord::new();
        let mut rows = 0;

        while reader
            .read_record(&mut record)
            .map_err(|e| StopsError::from_csv(&path, e))?
        {
            let stop = project_row(&header.row(&record))?;
            sink(stop)?;
            rows += 1;
        }

        debug!("Read {} data rows from {}", rows, path.display());
        Ok(rows)
    }

    /// Project every data row into memory, preserving file order
    pub fn read_all(self) -> Result<Vec<StopRecord>> {
        let mut stops = Vec::new();
        self.for_each_stop(|stop| {
            stops.push(stop);
            Ok(())
        })?;
        Ok(stops)
    }
}
