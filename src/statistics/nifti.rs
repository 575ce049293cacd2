//! NIfTI-specific statistical functions
//!
//! This module loads a single named volume from a NIfTI file and computes
//! the requested statistic over it. Per-file failures are recovered here:
//! a missing or undecodable file becomes a skip marker in the result, never
//! an error that could abort the batch.

use super::operations::{aggregate, ComputeOptions};
use crate::errors::{BatchNiiError, Result};
use crate::volume::ResolvedTarget;
use ndarray::{ArrayD, Axis};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};

/// Outcome of one file's computation
#[derive(Debug, Clone, PartialEq)]
pub enum StatOutcome {
    /// The computed statistic. NaN is a legitimate value here.
    Computed(f64),
    /// The file was skipped, with the reason recorded
    Skipped { reason: String },
}

/// Per-file result record, correlated 1:1 with the input row
#[derive(Debug, Clone, PartialEq)]
pub struct FileStat {
    pub filename: String,
    pub outcome: StatOutcome,
}

impl FileStat {
    /// The value cell written to the output table: the formatted statistic,
    /// or an empty cell for a skipped file
    #[must_use]
    pub fn value_cell(&self) -> String {
        match &self.outcome {
            StatOutcome::Computed(value) => value.to_string(),
            StatOutcome::Skipped { .. } => String::new(),
        }
    }
}

/// Computes the statistic for a single resolved target
///
/// A target whose path did not exist at resolution time is skipped with a
/// "not found" marker and a diagnostic line. Decode failures and
/// out-of-range volume indices are likewise recovered as per-file skips.
#[must_use]
pub fn compute_file_stat(target: &ResolvedTarget, options: &ComputeOptions) -> FileStat {
    if !target.exists {
        println!("⚠️  File not found: {}", target.clean_path);
        return FileStat {
            filename: target.clean_path.clone(),
            outcome: StatOutcome::Skipped {
                reason: "not found".to_string(),
            },
        };
    }

    match load_volume(&target.clean_path, target.volume_index) {
        Ok(data) => FileStat {
            filename: target.clean_path.clone(),
            outcome: StatOutcome::Computed(aggregate(&data, options)),
        },
        Err(e) => {
            eprintln!("⚠️  Skipping {}: {}", target.clean_path, e);
            FileStat {
                filename: target.clean_path.clone(),
                outcome: StatOutcome::Skipped {
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// Loads one volume of a NIfTI file as an `ArrayD<f64>`
///
/// The data is read with slope/intercept scaling applied. A 4D image is
/// sliced at `volume_index` along the trailing (volume) axis; an image with
/// three or fewer dimensions is returned unmodified regardless of
/// `volume_index`, since there is no extra axis to index.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if
/// `volume_index` is beyond the 4D image's trailing axis.
pub fn load_volume(path: &str, volume_index: usize) -> Result<ArrayD<f64>> {
    let object = ReaderOptions::new().read_file(path)?;
    let data = object.into_volume().into_ndarray::<f64>()?;

    if data.ndim() == 4 {
        let volumes = data.shape()[3];
        if volume_index >= volumes {
            return Err(BatchNiiError::VolumeOutOfRange {
                file: path.to_string(),
                volume: volume_index,
                volumes,
            });
        }
        Ok(data.index_axis_move(Axis(3), volume_index))
    } else {
        Ok(data)
    }
}
