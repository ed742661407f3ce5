//! Header resolution and row projection.
//!
//! Resolves the column positions declared by the header line and projects
//! each data row onto the fixed set of stop fields.

use crate::constants::STOP_FIELDS;
use crate::error::{Result, StopsError};
use crate::models::StopRecord;
use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

/// Column name to position lookup built from the header line
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Build the lookup. A repeated column name resolves to its last position.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(position, name)| (name.to_string(), position))
            .collect();

        Self { columns }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fail on the first stop field the header does not declare
    pub fn require_stop_fields(&self) -> Result<()> {
        if let Some(missing) = STOP_FIELDS
            .iter()
            .find(|field| !self.columns.contains_key(**field))
        {
            return Err(StopsError::missing_header_field(*missing));
        }

        debug!(
            "Header declares all {} stop fields ({} columns total)",
            STOP_FIELDS.len(),
            self.columns.len()
        );
        Ok(())
    }

    /// View a data record through this header
    pub fn row<'a>(&'a self, record: &'a StringRecord) -> SourceRow<'a> {
        SourceRow {
            header: self,
            record,
        }
    }
}

/// A data row addressed by column name
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    header: &'a HeaderIndex,
    record: &'a StringRecord,
}

impl<'a> SourceRow<'a> {
    /// Value of the named column, `None` when the header lacks it or the row is too short
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.header
            .position(column)
            .and_then(|position| self.record.get(position))
    }

    /// Source line of this row, when known
    pub fn line(&self) -> Option<u64> {
        self.record.position().map(|pos| pos.line())
    }
}

/// Copy the stop fields of one row into a record, verbatim
pub fn project_row(row: &SourceRow<'_>) -> Result<StopRecord> {
    let field = |column: &str| {
        row.get(column)
            .map(str::to_string)
            .ok_or_else(|| StopsError::missing_row_field(column, row.line()))
    };

    Ok(StopRecord {
        stop_id: field("stop_id")?,
        stop_code: field("stop_code")?,
        stop_name: field("stop_name")?,
        stop_lat: field("stop_lat")?,
        stop_lon: field("stop_lon")?,
        stop_url: field("stop_url")?,
        location_type: field("location_type")?,
        parent_station: field("parent_station")?,
        wheelchair_boarding: field("wheelchair_boarding")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header() -> StringRecord {
        StringRecord::from(STOP_FIELDS.to_vec())
    }

    #[test]
    fn test_header_positions() {
        let header = HeaderIndex::from_headers(&StringRecord::from(vec![
            "stop_name",
            "stop_id",
            "stop_timezone",
        ]));

        assert_eq!(header.len(), 3);
        assert_eq!(header.position("stop_id"), Some(1));
        assert_eq!(header.position("stop_name"), Some(0));
        assert_eq!(header.position("zone_id"), None);
    }

    #[test]
    fn test_empty_header() {
        let header = HeaderIndex::from_headers(&StringRecord::new());
        assert!(header.is_empty());
        assert!(header.require_stop_fields().is_err());
        assert!(!HeaderIndex::from_headers(&full_header()).is_empty());
    }

    #[test]
    fn test_repeated_column_uses_last_position() {
        let header =
            HeaderIndex::from_headers(&StringRecord::from(vec!["stop_id", "stop_name", "stop_id"]));
        assert_eq!(header.position("stop_id"), Some(2));
    }

    #[test]
    fn test_require_stop_fields_reports_first_missing() {
        let columns: Vec<&str> = STOP_FIELDS
            .iter()
            .copied()
            .filter(|name| *name != "stop_lon" && *name != "stop_url")
            .collect();
        let header = HeaderIndex::from_headers(&StringRecord::from(columns));

        match header.require_stop_fields().unwrap_err() {
            StopsError::MissingField { field, line } => {
                assert_eq!(field, "stop_lon");
                assert_eq!(line, Some(1));
            }
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_require_stop_fields_is_case_sensitive() {
        let columns: Vec<&str> = STOP_FIELDS
            .iter()
            .copied()
            .map(|name| if name == "stop_id" { "STOP_ID" } else { name })
            .collect();
        let header = HeaderIndex::from_headers(&StringRecord::from(columns));
        assert!(header.require_stop_fields().is_err());
    }

    #[test]
    fn test_project_row_copies_verbatim() {
        let header = HeaderIndex::from_headers(&full_header());
        let record = StringRecord::from(vec![
            " S1 ",
            "",
            "Main St",
            "40.0",
            "-73.0",
            "",
            "0",
            "",
            "1",
        ]);

        let stop = project_row(&header.row(&record)).unwrap();
        assert_eq!(stop.stop_id, " S1 ");
        assert_eq!(stop.stop_code, "");
        assert_eq!(stop.stop_name, "Main St");
        assert_eq!(stop.stop_lat, "40.0");
        assert_eq!(stop.stop_lon, "-73.0");
        assert_eq!(stop.location_type, "0");
        assert_eq!(stop.wheelchair_boarding, "1");
    }

    #[test]
    fn test_project_row_ignores_column_order_and_extras() {
        let header = HeaderIndex::from_headers(&StringRecord::from(vec![
            "wheelchair_boarding",
            "stop_timezone",
            "parent_station",
            "location_type",
            "stop_url",
            "stop_lon",
            "stop_lat",
            "stop_name",
            "stop_code",
            "stop_id",
        ]));
        let record = StringRecord::from(vec![
            "2",
            "America/Montreal",
            "P1",
            "1",
            "http://example.org",
            "-73.5",
            "45.5",
            "Berri-UQAM",
            "51234",
            "BERRI",
        ]);

        let stop = project_row(&header.row(&record)).unwrap();
        assert_eq!(stop.stop_id, "BERRI");
        assert_eq!(stop.stop_code, "51234");
        assert_eq!(stop.stop_url, "http://example.org");
        assert_eq!(stop.parent_station, "P1");
        assert_eq!(stop.wheelchair_boarding, "2");
    }

    #[test]
    fn test_project_short_row_is_missing_field() {
        let header = HeaderIndex::from_headers(&full_header());
        let record = StringRecord::from(vec!["S1", "", "Main St", "40.0", "-73.0", "", "0"]);

        match project_row(&header.row(&record)).unwrap_err() {
            StopsError::MissingField { field, .. } => assert_eq!(field, "parent_station"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_fields_match_record_keys() {
        let header = HeaderIndex::from_headers(&full_header());
        let record = StringRecord::from(STOP_FIELDS.to_vec());
        let stop = project_row(&header.row(&record)).unwrap();

        let value = serde_json::to_value(&stop).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        let mut expected = STOP_FIELDS.to_vec();
        let mut actual = keys;
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        // Each field holds the text of the column with the same name
        for (key, text) in value.as_object().unwrap() {
            assert_eq!(text, key.as_str());
        }
    }
}
