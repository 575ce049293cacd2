//! Statistical computations over NIfTI volumes
//!
//! This module provides the statistic options and the per-file computation
//! used by the batch runner.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`operations`]: Statistic selection and voxel aggregation
//! - [`nifti`]: NIfTI-specific loading and per-file computation

pub mod nifti;
pub mod operations;

// Re-export the main types and functions for convenience
pub use self::nifti::{compute_file_stat, load_volume, FileStat, StatOutcome};
pub use self::operations::{aggregate, ComputeOptions, Statistic};
