//! Integration tests for the processor module
//!
//! Exercises complete conversions against stops files written to temporary
//! directories.


use std::fs;
use std::path::{Path, PathBuf};

pub const STOPS_HEADER: &str = "stop_id,stop_code,stop_name,stop_lat,stop_lon,stop_url,location_type,parent_station,wheelchair_boarding";

/// Write a stops file made of `lines` into `dir`
pub fn write_stops(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("stops.txt");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Parse a written document back into JSON values
pub fn read_document(path: &Path) -> Vec<serde_json::Value> {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
