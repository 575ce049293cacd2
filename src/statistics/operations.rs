//! Core statistical operations and option types
//!
//! This module defines the statistic selection and the voxel aggregation logic.

use crate::errors::{BatchNiiError, Result};
use ndarray::ArrayD;

/// Supported summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Arithmetic mean
    Mean,
    /// Population standard deviation (divide by N)
    StdDev,
}

impl Statistic {
    /// Get the string representation of the statistic
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::StdDev => "sd",
        }
    }
}

/// Options shared read-only by every computation in a run
///
/// Constructed once from the command-line selector and passed by reference
/// into each worker, never as mutable global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeOptions {
    pub statistic: Statistic,
    /// Restrict the statistic to strictly positive voxels
    pub omit_zeros: bool,
}

impl ComputeOptions {
    /// Map a selector to its options, following FSL's conventions:
    /// `M` (mean, nonzero), `m` (mean, all), `S` (sd, nonzero), `s` (sd, all)
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` for anything but the four supported values.
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector {
            "M" => Ok(Self {
                statistic: Statistic::Mean,
                omit_zeros: true,
            }),
            "m" => Ok(Self {
                statistic: Statistic::Mean,
                omit_zeros: false,
            }),
            "S" => Ok(Self {
                statistic: Statistic::StdDev,
                omit_zeros: true,
            }),
            "s" => Ok(Self {
                statistic: Statistic::StdDev,
                omit_zeros: false,
            }),
            other => Err(BatchNiiError::InvalidSelector {
                selector: other.to_string(),
            }),
        }
    }

    /// The selector letter, used in the output file name
    #[must_use]
    pub const fn selector_code(&self) -> &'static str {
        match (self.statistic, self.omit_zeros) {
            (Statistic::Mean, true) => "M",
            (Statistic::Mean, false) => "m",
            (Statistic::StdDev, true) => "S",
            (Statistic::StdDev, false) => "s",
        }
    }

    /// Header of the result column, e.g. "mean of nonzero voxels"
    #[must_use]
    pub fn column_label(&self) -> String {
        let voxels = if self.omit_zeros { "nonzero" } else { "all" };
        format!("{} of {} voxels", self.statistic.as_str(), voxels)
    }
}

/// Computes the requested statistic over a voxel array
///
/// With `omit_zeros` set, only strictly positive voxels enter the
/// aggregation. An empty selection (e.g. an all-zero image with
/// `omit_zeros`) yields NaN, which is a legitimate result and is passed
/// through to the output unchanged. NaN voxels propagate into the
/// all-voxel statistics the same way they would through numpy.
#[must_use]
pub fn aggregate(data: &ArrayD<f64>, options: &ComputeOptions) -> f64 {
    match options.statistic {
        Statistic::Mean => voxel_mean(data, options.omit_zeros),
        Statistic::StdDev => voxel_std(data, options.omit_zeros),
    }
}

fn voxel_sum_count(data: &ArrayD<f64>, omit_zeros: bool) -> (f64, usize) {
    data.iter()
        .filter(|&&x| !omit_zeros || x > 0.0)
        .fold((0.0, 0), |(sum, count), &x| (sum + x, count + 1))
}

fn voxel_mean(data: &ArrayD<f64>, omit_zeros: bool) -> f64 {
    let (sum, count) = voxel_sum_count(data, omit_zeros);
    if count > 0 {
        sum / count as f64
    } else {
        f64::NAN
    }
}

fn voxel_std(data: &ArrayD<f64>, omit_zeros: bool) -> f64 {
    let (sum, count) = voxel_sum_count(data, omit_zeros);
    if count == 0 {
        return f64::NAN;
    }

    let mean = sum / count as f64;
    let sq_sum: f64 = data
        .iter()
        .filter(|&&x| !omit_zeros || x > 0.0)
        .map(|&x| (x - mean).powi(2))
        .sum();

    (sq_sum / count as f64).sqrt()
}
