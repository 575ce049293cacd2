//! batch_niistats: batch statistics for NIfTI images
//!
//! A Rust library for computing summary statistics (mean or standard
//! deviation, over all voxels or only non-zero voxels) for a list of NIfTI
//! files named in a CSV datalist, using parallel processing. Per-file
//! results are merged back with the original datalist rows and written to
//! a timestamped output CSV.
//!
//! ## Key Features
//!
//! - **Parallel Processing**: One task per file across the Rayon pool,
//!   results correlated 1:1 with input order
//! - **Volume Selection**: Resolves an explicit `volume_0basedindex`
//!   column and SPM-style `,N` inline syntax into a single 0-based volume
//!   per file, with a defined precedence and default
//! - **Robust Batches**: A missing or undecodable file is recorded and
//!   reported without aborting the rest of the run
//! - **Passthrough Columns**: Any extra datalist columns survive verbatim
//!   into the output table
//!
//! ## Module Organization
//!
//! The library is organized into logical modules:
//!
//! - [`datalist`]: Datalist CSV parsing into typed rows
//! - [`volume`]: Inline volume syntax and per-batch volume resolution
//! - [`statistics`]: Per-file NIfTI loading and voxel aggregation
//! - [`batch`]: Order-preserving parallel fan-out over the datalist
//! - [`table`]: Result table assembly and timestamped CSV output
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use batch_niistats::prelude::*;
//! use std::path::Path;
//!
//! let options = ComputeOptions::from_selector("M").unwrap();
//!
//! let datalist = batch_niistats::datalist::load_datalist(Path::new("subjects.csv")).unwrap();
//! let targets = batch_niistats::volume::resolve_targets(&datalist.rows);
//! let results = batch_niistats::batch::run_batch(&targets, &options);
//!
//! let table = ResultTable::assemble(&datalist, &results, &options.column_label());
//! table.print();
//! ```
//!
//! The library is designed to process large batches of images efficiently
//! and provides clear error reporting for debugging and analysis.

// Core modules
pub mod batch;
pub mod cli;
pub mod datalist;
pub mod errors;
pub mod parallel;
pub mod statistics;
pub mod table;
pub mod volume;

// Direct re-exports for the public API
pub use batch::*;
pub use datalist::*;
pub use errors::*;
pub use parallel::*;
pub use statistics::*;
pub use table::*;
pub use volume::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::batch::run_batch;
    pub use crate::datalist::{load_datalist, Datalist, InputRow};
    pub use crate::errors::{BatchNiiError, Result};
    pub use crate::parallel::ParallelConfig;
    pub use crate::statistics::{ComputeOptions, FileStat, StatOutcome, Statistic};
    pub use crate::table::ResultTable;
    pub use crate::volume::{resolve_targets, ResolvedTarget};
}
