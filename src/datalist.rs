//! Datalist loading: CSV input → typed rows
//!
//! The datalist is a CSV with a required `input_file` column, an optional
//! `volume_0basedindex` column, and any number of other columns which are
//! carried through to the output verbatim. Parsing happens once up front
//! so the rest of the pipeline never inspects a live table shape.

use crate::errors::{BatchNiiError, Result};
use std::path::Path;

/// Name of the required path column
pub const INPUT_FILE_COLUMN: &str = "input_file";

/// Name of the optional explicit volume column
pub const VOLUME_COLUMN: &str = "volume_0basedindex";

/// One parsed datalist entry, immutable once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// The `input_file` cell verbatim; may embed an inline volume suffix
    pub raw_path: String,
    /// Parsed `volume_0basedindex` cell; blank or non-numeric means none
    pub user_volume: Option<usize>,
    /// The full original record, preserved for the output table
    pub record: Vec<String>,
}

/// A parsed datalist: original header row plus typed rows
#[derive(Debug, Clone)]
pub struct Datalist {
    /// Original column headers, order preserved
    pub headers: Vec<String>,
    pub rows: Vec<InputRow>,
}

impl Datalist {
    /// Number of rows in the datalist
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads a datalist CSV into typed rows
///
/// # Errors
///
/// Returns `MissingColumn` if the header row has no `input_file` column,
/// or a CSV error if the file cannot be read. Both are configuration
/// errors: they fail the run before any image is touched.
pub fn load_datalist(path: &Path) -> Result<Datalist> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let input_idx = headers
        .iter()
        .position(|h| h == INPUT_FILE_COLUMN)
        .ok_or_else(|| BatchNiiError::MissingColumn {
            column: INPUT_FILE_COLUMN.to_string(),
        })?;
    let volume_idx = headers.iter().position(|h| h == VOLUME_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();

        let raw_path = fields.get(input_idx).cloned().unwrap_or_default();
        // A blank or non-numeric cell means the user left the volume unspecified
        let user_volume = volume_idx
            .and_then(|i| fields.get(i))
            .and_then(|cell| cell.trim().parse::<usize>().ok());

        rows.push(InputRow {
            raw_path,
            user_volume,
            record: fields,
        });
    }

    Ok(Datalist { headers, rows })
}
