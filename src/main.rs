//! Entry point for the batch_niistats application.
//! Handles CLI parsing, datalist loading, and dispatches the parallel batch computation.

use batch_niistats::batch::run_batch;
use batch_niistats::cli::Args;
use batch_niistats::datalist::load_datalist;
use batch_niistats::parallel::{get_parallel_info, ParallelConfig};
use batch_niistats::table::ResultTable;
use batch_niistats::volume::resolve_targets;
use chrono::Local;
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments; an unrecognized statistic option is
    // rejected here, before any file is touched
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
                        batch_niistats
              Rust-based NIfTI batch statistics tool
------------------------------------------------------------------
                        "#
    );

    let timestamp = Local::now();
    println!(
        "[{}] Compiling .csv file with {} values of .nii files listed in:\n{}\n",
        timestamp.format("%Y.%m.%d %H:%M:%S"),
        args.option.statistic.as_str(),
        args.file.display()
    );

    ParallelConfig::new(args.threads).setup_global_pool()?;
    if args.verbose {
        get_parallel_info().print_info();
    }

    // Read the datalist and resolve each row to a concrete file and volume
    let datalist = load_datalist(&args.file)?;
    let targets = resolve_targets(&datalist.rows);

    let results = run_batch(&targets, &args.option);

    let table = ResultTable::assemble(&datalist, &results, &args.option.column_label());
    println!();
    table.print();

    let output_path = match &args.output_csv {
        Some(path) => {
            table.write_csv(path)?;
            path.clone()
        }
        None => table.save_timestamped(&args.file, &args.option, &timestamp)?,
    };

    println!("\n✅ Output saved to file:\n{}\n", output_path.display());

    Ok(())
}
