//! Parallel fan-out of per-file computations
//!
//! One task per datalist row, dispatched across the Rayon pool. Results
//! come back correlated 1:1 with the input sequence: `results[i]` is the
//! outcome for `targets[i]` regardless of completion order.

use crate::statistics::{compute_file_stat, ComputeOptions, FileStat};
use crate::volume::ResolvedTarget;
use rayon::prelude::*;

/// Runs the statistic over every target in parallel, preserving input order
///
/// Each invocation is independent; a failure inside one file's computation
/// is recovered there and never cancels or delays its siblings. The only
/// shared state is the read-only `options`.
#[must_use]
pub fn run_batch(targets: &[ResolvedTarget], options: &ComputeOptions) -> Vec<FileStat> {
    println!(
        "⚡ Processing {} files across {} CPU cores",
        targets.len(),
        rayon::current_num_threads()
    );

    targets
        .par_iter()
        .map(|target| compute_file_stat(target, options))
        .collect()
}
