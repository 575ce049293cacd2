//! Result table assembly and CSV output
//!
//! This module merges the per-file results back with the original datalist
//! rows and writes the combined table to a timestamped CSV next to the
//! input, mirroring the layout the datalist came in with.

use crate::datalist::Datalist;
use crate::errors::Result;
use crate::statistics::{ComputeOptions, FileStat};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// The assembled output table: every original column plus one stat column
#[derive(Debug, Clone)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Merges each datalist row with its corresponding result
    ///
    /// Rows keep their original order and every original column verbatim.
    /// The appended cell holds the formatted statistic, or stays blank for
    /// a skipped file. `label` becomes the new column's header.
    #[must_use]
    pub fn assemble(datalist: &Datalist, results: &[FileStat], label: &str) -> Self {
        let mut headers = datalist.headers.clone();
        headers.push(label.to_string());

        let rows = datalist
            .rows
            .iter()
            .zip(results)
            .map(|(row, stat)| {
                let mut fields = row.record.clone();
                fields.push(stat.value_cell());
                fields
            })
            .collect();

        Self { headers, rows }
    }

    /// Echoes the table to the terminal
    pub fn print(&self) {
        println!("{}", self.headers.join(","));
        for row in &self.rows {
            println!("{}", row.join(","));
        }
    }

    /// Writes the table to an explicit CSV path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_csv(&self, output_path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(output_path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Saves the table to a timestamped CSV in the datalist's directory
    ///
    /// The file name carries the run timestamp and the statistic selector,
    /// e.g. `20250409_142501_subjects_calc_M.csv` for a datalist named
    /// `subjects.csv`. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_timestamped(
        &self,
        datalist_path: &Path,
        options: &ComputeOptions,
        timestamp: &DateTime<Local>,
    ) -> Result<PathBuf> {
        let stem = datalist_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("datalist");

        let file_name = format!(
            "{}_{}_calc_{}.csv",
            timestamp.format("%Y%m%d_%H%M%S"),
            stem,
            options.selector_code()
        );

        let output_path = match datalist_path.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };

        self.write_csv(&output_path)?;
        Ok(output_path)
    }
}
