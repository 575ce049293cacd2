//! Defines command-line interface options using `clap` for the batch_niistats application.

use crate::statistics::ComputeOptions;
use clap::Parser;
use std::path::PathBuf;

const DATALIST_HELP: &str = "\
The datalist must be a CSV file with a column named 'input_file' listing \
the absolute paths to the .nii files to process. An optional \
'volume_0basedindex' column indicates which volume of a 4D image to read, \
using 0-based indexing (0 for the first volume, 1 for the second, etc).

In lieu of a 'volume_0basedindex' column, volumes can also be specified in \
the input_file column using SPM syntax, where ',N' is placed after the \
filename and N indicates the volume using 1-based indexing.

Both can be omitted if all files are 3D NIfTIs or if the statistic should \
be calculated on the first volume of each image.";

/// A CLI tool for batch statistics over NIfTI files
#[derive(Parser, Debug)]
#[command(
    version = "0.3.0",
    name = "batch_niistats",
    about = "Calculate statistics from a list of .nii files",
    after_long_help = DATALIST_HELP
)]
pub struct Args {
    /// Statistical option: M (mean, nonzero), m (mean, all), S (sd, nonzero), s (sd, all)
    #[arg(value_parser = parse_statistic_arg)]
    pub option: ComputeOptions,

    /// Path to the datalist CSV listing the .nii files to process
    #[arg(short, long)]
    pub file: PathBuf,

    /// Path to save the result CSV. If not set, a timestamped file is written next to the datalist.
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

fn parse_statistic_arg(s: &str) -> Result<ComputeOptions, String> {
    ComputeOptions::from_selector(s).map_err(|e| e.to_string())
}
