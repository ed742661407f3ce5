//! JSON writing module for stop documents
//!
//! Serializes stop records as a pretty-printed JSON array. Output goes to a
//! temporary file beside the destination which replaces the destination only
//! once the document is complete, so a failed run never leaves a truncated
//! file behind.

#[cfg(unix)]
use crate::constants::NEW_FILE_MODE;
use crate::constants::{JSON_INDENT, TEMP_FILE_PREFIX};
use crate::error::{Result, StopsError};
use crate::models::StopRecord;

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer as _};
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Atomic JSON writer for a single destination path
#[derive(Debug, Clone)]
pub struct JsonWriter {
    destination: PathBuf,
}

impl JsonWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Write a fully materialized document, returning the bytes written
    pub fn write_all(&self, stops: &[StopRecord]) -> Result<u64> {
        let mut temp = self.create_temp()?;
        {
            let mut out = BufWriter::new(temp.as_file_mut());
            let mut serializer =
                Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
            stops
                .serialize(&mut serializer)
                .map_err(|e| self.failure(e.into()))?;
            out.flush().map_err(|e| self.failure(e))?;
        }

        debug!("Serialized {} records", stops.len());
        self.commit(temp)
    }

    /// Write records as `produce` emits them, one array element at a time.
    ///
    /// `produce` returns the number of rows it emitted. Any error it returns
    /// abandons the temporary file and leaves the destination untouched.
    pub fn write_streaming<F>(&self, produce: F) -> Result<(usize, u64)>
    where
        F: FnOnce(&mut dyn FnMut(StopRecord) -> Result<()>) -> Result<usize>,
    {
        let mut temp = self.create_temp()?;
        let rows = {
            let mut out = BufWriter::new(temp.as_file_mut());
            let mut serializer =
                Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
            let mut seq = serializer
                .serialize_seq(None)
                .map_err(|e| self.failure(e.into()))?;

            let rows = produce(&mut |stop: StopRecord| {
                seq.serialize_element(&stop)
                    .map_err(|e| self.failure(e.into()))
            })?;

            seq.end().map_err(|e| self.failure(e.into()))?;
            out.flush().map_err(|e| self.failure(e))?;
            rows
        };

        debug!("Streamed {} records", rows);
        let bytes = self.commit(temp)?;
        Ok((rows, bytes))
    }

    /// Temporary file in the destination directory, so the final rename stays on one filesystem.
    ///
    /// A new file gets the usual umask-filtered mode; a replaced file keeps its own.
    fn create_temp(&self) -> Result<NamedTempFile> {
        let dir = match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_FILE_PREFIX).suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
        }

        let temp = builder.tempfile_in(dir).map_err(|e| self.failure(e))?;

        if let Ok(existing) = fs::metadata(&self.destination) {
            if existing.is_file() {
                temp.as_file()
                    .set_permissions(existing.permissions())
                    .map_err(|e| self.failure(e))?;
            }
        }

        Ok(temp)
    }

    fn commit(&self, temp: NamedTempFile) -> Result<u64> {
        temp.persist(&self.destination)
            .map_err(|e| self.failure(e.error))?;

        let bytes = fs::metadata(&self.destination)
            .map_err(|e| self.failure(e))?
            .len();

        debug!(
            "Replaced {} ({} bytes)",
            self.destination.display(),
            bytes
        );
        Ok(bytes)
    }

    fn failure(&self, source: std::io::Error) -> StopsError {
        StopsError::write_failure(&self.destination, source)
    }
}
