//! CSV readers for campus building and walkway data.
//!
//! Both files start with a header row. Fields may be double-quoted; inside
//! quotes a doubled `""` stands for one quote character.

use crate::error::{CampusError, Result};
use crate::point::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named building and the map location of its entrance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusBuilding {
    /// Abbreviation used in queries (e.g. "KNE")
    pub short_name: String,
    /// Human-readable name
    pub long_name: String,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl CampusBuilding {
    /// Map location of the building.
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A walkway segment between two points with its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusPath {
    /// Start horizontal coordinate
    pub x1: f64,
    /// Start vertical coordinate
    pub y1: f64,
    /// End horizontal coordinate
    pub x2: f64,
    /// End vertical coordinate
    pub y2: f64,
    /// Walking distance along the segment
    pub distance: f64,
}

impl CampusPath {
    /// Segment start.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Segment end.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Read building records from a CSV file.
///
/// # Errors
///
/// Returns [`CampusError::Io`] if the file cannot be read and
/// [`CampusError::Parse`] for the first malformed row.
pub fn parse_campus_buildings(path: &Path) -> Result<Vec<CampusBuilding>> {
    let text = read(path)?;
    buildings_from_str(&text, &path.display().to_string())
}

/// Read walkway segments from a CSV file.
///
/// # Errors
///
/// Returns [`CampusError::Io`] if the file cannot be read and
/// [`CampusError::Parse`] for the first malformed row.
pub fn parse_campus_paths(path: &Path) -> Result<Vec<CampusPath>> {
    let text = read(path)?;
    paths_from_str(&text, &path.display().to_string())
}

/// Parse building records from CSV text. `origin` names the input in errors.
pub fn buildings_from_str(text: &str, origin: &str) -> Result<Vec<CampusBuilding>> {
    let mut buildings = Vec::new();
    for (line, fields) in records(text) {
        let parsed = fields.and_then(|fields| {
            expect_fields(&fields, 4)?;
            Ok(CampusBuilding {
                short_name: non_empty(&fields[0], "shortName")?,
                long_name: non_empty(&fields[1], "longName")?,
                x: coordinate(&fields[2], "x")?,
                y: coordinate(&fields[3], "y")?,
            })
        });
        buildings.push(parsed.map_err(|message| parse_error(origin, line, message))?);
    }
    debug!("Parsed {} buildings from {origin}", buildings.len());
    Ok(buildings)
}

/// Parse walkway segments from CSV text. `origin` names the input in errors.
pub fn paths_from_str(text: &str, origin: &str) -> Result<Vec<CampusPath>> {
    let mut paths = Vec::new();
    for (line, fields) in records(text) {
        let parsed = fields.and_then(|fields| {
            expect_fields(&fields, 5)?;
            let distance = coordinate(&fields[4], "distance")?;
            if distance < 0.0 {
                return Err(format!("distance must not be negative, found {distance}"));
            }
            Ok(CampusPath {
                x1: coordinate(&fields[0], "x1")?,
                y1: coordinate(&fields[1], "y1")?,
                x2: coordinate(&fields[2], "x2")?,
                y2: coordinate(&fields[3], "y2")?,
                distance,
            })
        });
        paths.push(parsed.map_err(|message| parse_error(origin, line, message))?);
    }
    debug!("Parsed {} path segments from {origin}", paths.len());
    Ok(paths)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CampusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(origin: &str, line: usize, message: String) -> CampusError {
    CampusError::Parse {
        origin: origin.to_string(),
        line,
        message,
    }
}

/// Data rows with their 1-based line numbers. Skips the header and blank lines.
fn records(
    text: &str,
) -> impl Iterator<Item = (usize, std::result::Result<Vec<String>, String>)> + '_ {
    text.lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| (line_no, split_record(line)))
}

/// Split one CSV line into unquoted fields.
fn split_record(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            (c, _) => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

fn expect_fields(fields: &[String], expected: usize) -> std::result::Result<(), String> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(format!("expected {expected} fields, found {}", fields.len()))
    }
}

fn non_empty(field: &str, name: &str) -> std::result::Result<String, String> {
    let value = field.trim();
    if value.is_empty() {
        Err(format!("{name} is empty"))
    } else {
        Ok(value.to_string())
    }
}

fn coordinate(field: &str, name: &str) -> std::result::Result<f64, String> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{name} is not a finite number: {field:?}")),
    }
}
