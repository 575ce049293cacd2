//! Comprehensive unit tests for batch_niistats modules
//!
//! These tests provide extensive coverage of the core functionality
//! to ensure reliability and prevent regressions.

use batch_niistats::{
    datalist::{load_datalist, Datalist, InputRow},
    errors::BatchNiiError,
    parallel::{get_parallel_info, ParallelConfig},
    statistics::{aggregate, ComputeOptions, FileStat, StatOutcome, Statistic},
    table::ResultTable,
    volume::{join_volume_suffix, resolve_targets, split_volume_suffix},
};
use ndarray::ArrayD;
use tempfile::tempdir;

fn row(raw_path: &str, user_volume: Option<usize>) -> InputRow {
    InputRow {
        raw_path: raw_path.to_string(),
        user_volume,
        record: vec![raw_path.to_string()],
    }
}

#[test]
fn test_error_types() {
    let col_err = BatchNiiError::MissingColumn {
        column: "input_file".to_string(),
    };
    assert!(format!("{}", col_err).contains("Column 'input_file' not found"));

    let sel_err = BatchNiiError::InvalidSelector {
        selector: "x".to_string(),
    };
    assert!(format!("{}", sel_err).contains("Unrecognized statistic option 'x'"));

    let vol_err = BatchNiiError::VolumeOutOfRange {
        file: "scan.nii".to_string(),
        volume: 5,
        volumes: 3,
    };
    assert!(format!("{}", vol_err).contains("Volume 5 out of range for 'scan.nii'"));
    assert!(format!("{}", vol_err).contains("3 volumes available"));

    let generic_err = BatchNiiError::Generic("Test error".to_string());
    assert_eq!(format!("{}", generic_err), "Test error");
}

#[test]
fn test_parallel_config() {
    // Test default configuration
    let default_config = ParallelConfig::new_default();
    assert!(default_config.num_threads.is_none());

    // Test with specific threads
    let config_4 = ParallelConfig::with_threads(4);
    assert_eq!(config_4.num_threads, Some(4));

    // Test all cores configuration
    let all_cores_config = ParallelConfig::all_cores();
    assert!(all_cores_config.num_threads.is_some());
    assert!(all_cores_config.num_threads.unwrap() > 0);

    // Test current threads
    let current = default_config.current_threads();
    assert!(current > 0);
}

#[test]
fn test_parallel_info() {
    let info = get_parallel_info();
    assert!(info.current_threads > 0);
    assert!(info.available_cores > 0);
    assert!(info.available_parallelism > 0);

    // Test info printing (doesn't panic)
    info.print_info();
}

#[test]
fn test_compute_options_from_selector() {
    let upper_m = ComputeOptions::from_selector("M").expect("M is a valid selector");
    assert_eq!(upper_m.statistic, Statistic::Mean);
    assert!(upper_m.omit_zeros);

    let lower_m = ComputeOptions::from_selector("m").expect("m is a valid selector");
    assert_eq!(lower_m.statistic, Statistic::Mean);
    assert!(!lower_m.omit_zeros);

    let upper_s = ComputeOptions::from_selector("S").expect("S is a valid selector");
    assert_eq!(upper_s.statistic, Statistic::StdDev);
    assert!(upper_s.omit_zeros);

    let lower_s = ComputeOptions::from_selector("s").expect("s is a valid selector");
    assert_eq!(lower_s.statistic, Statistic::StdDev);
    assert!(!lower_s.omit_zeros);

    // Anything else is a configuration error, caught before any file I/O
    let invalid = ComputeOptions::from_selector("x");
    match invalid {
        Err(BatchNiiError::InvalidSelector { selector }) => assert_eq!(selector, "x"),
        _ => panic!("Expected InvalidSelector error"),
    }
}

#[test]
fn test_column_label_and_selector_code() {
    let upper_m = ComputeOptions::from_selector("M").unwrap();
    assert_eq!(upper_m.column_label(), "mean of nonzero voxels");
    assert_eq!(upper_m.selector_code(), "M");

    let lower_s = ComputeOptions::from_selector("s").unwrap();
    assert_eq!(lower_s.column_label(), "sd of all voxels");
    assert_eq!(lower_s.selector_code(), "s");

    assert_eq!(Statistic::Mean.as_str(), "mean");
    assert_eq!(Statistic::StdDev.as_str(), "sd");
}

#[test]
fn test_split_volume_suffix() {
    // The inline syntax is 1-based; internal representation is 0-based
    assert_eq!(split_volume_suffix("f.nii,3"), ("f.nii", Some(2)));
    assert_eq!(split_volume_suffix("f.nii,1"), ("f.nii", Some(0)));

    // No separator means no suffix
    assert_eq!(split_volume_suffix("f.nii"), ("f.nii", None));

    // A malformed suffix is treated as absent, not an error, and the raw
    // string stays untouched
    assert_eq!(split_volume_suffix("f.nii,abc"), ("f.nii,abc", None));
    assert_eq!(split_volume_suffix("f.nii,"), ("f.nii,", None));
    assert_eq!(split_volume_suffix("f.nii,-2"), ("f.nii,-2", None));
    assert_eq!(split_volume_suffix("f.nii,2,3"), ("f.nii,2,3", None));

    // 1-based syntax has no zeroth volume
    assert_eq!(split_volume_suffix("f.nii,0"), ("f.nii,0", None));
}

#[test]
fn test_join_split_round_trip() {
    for n in 0..6 {
        let joined = join_volume_suffix("path/to/scan.nii", n);
        assert_eq!(split_volume_suffix(&joined), ("path/to/scan.nii", Some(n)));
    }

    assert_eq!(join_volume_suffix("f.nii", 0), "f.nii,1");
    assert_eq!(join_volume_suffix("f.nii", 4), "f.nii,5");
}

#[test]
fn test_resolve_volume_precedence() {
    // Separator-free path with no explicit column defaults to volume 0
    let targets = resolve_targets(&[row("a.nii", None)]);
    assert_eq!(targets[0].volume_index, 0);
    assert_eq!(targets[0].clean_path, "a.nii");

    // The explicit column wins any conflict with the inline suffix
    let targets = resolve_targets(&[row("a.nii,5", Some(3))]);
    assert_eq!(targets[0].volume_index, 3);
    assert_eq!(targets[0].clean_path, "a.nii");

    // Agreeing sources use the shared value (suffix "3" is 0-based index 2)
    let targets = resolve_targets(&[row("a.nii,3", Some(2))]);
    assert_eq!(targets[0].volume_index, 2);

    // Suffix alone is used when the column is absent
    let targets = resolve_targets(&[row("a.nii,3", None)]);
    assert_eq!(targets[0].volume_index, 2);

    // A malformed suffix behaves as if no suffix were present
    let targets = resolve_targets(&[row("a.nii,junk", None)]);
    assert_eq!(targets[0].volume_index, 0);
    assert_eq!(targets[0].clean_path, "a.nii,junk");

    let targets = resolve_targets(&[row("a.nii,junk", Some(4))]);
    assert_eq!(targets[0].volume_index, 4);
}

#[test]
fn test_resolve_is_idempotent() {
    let rows = vec![
        row("a.nii", None),
        row("b.nii,2", None),
        row("c.nii,7", Some(1)),
    ];

    let first = resolve_targets(&rows);
    let second = resolve_targets(&rows);
    assert_eq!(first, second);
}

#[test]
fn test_resolve_existence_check() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let real_path = temp_dir.path().join("present.nii");
    std::fs::write(&real_path, b"stub").expect("Failed to write stub file");
    let real = real_path.to_str().unwrap();

    let rows = vec![
        row(real, None),
        row("/no/such/file.nii", None),
        // Duplicate path exercises the memoized lookup
        row(real, Some(1)),
    ];

    let targets = resolve_targets(&rows);
    assert!(targets[0].exists);
    assert!(!targets[1].exists);
    assert!(targets[2].exists);
    assert_eq!(targets[2].volume_index, 1);
}

#[test]
fn test_load_datalist() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("datalist.csv");
    std::fs::write(
        &csv_path,
        "input_file,volume_0basedindex,subject\n\
         /data/a.nii,2,s01\n\
         /data/b.nii,,s02\n\
         /data/c.nii,junk,s03\n",
    )
    .expect("Failed to write datalist");

    let datalist = load_datalist(&csv_path).expect("Datalist should parse");
    assert_eq!(
        datalist.headers,
        vec!["input_file", "volume_0basedindex", "subject"]
    );
    assert_eq!(datalist.len(), 3);

    assert_eq!(datalist.rows[0].raw_path, "/data/a.nii");
    assert_eq!(datalist.rows[0].user_volume, Some(2));

    // Blank and non-numeric volume cells mean "user volume undefined"
    assert_eq!(datalist.rows[1].user_volume, None);
    assert_eq!(datalist.rows[2].user_volume, None);

    // The full record is preserved for passthrough
    assert_eq!(
        datalist.rows[2].record,
        vec!["/data/c.nii", "junk", "s03"]
    );
}

#[test]
fn test_load_datalist_missing_input_column() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("bad.csv");
    std::fs::write(&csv_path, "filename,subject\n/data/a.nii,s01\n")
        .expect("Failed to write datalist");

    let result = load_datalist(&csv_path);
    match result {
        Err(BatchNiiError::MissingColumn { column }) => assert_eq!(column, "input_file"),
        _ => panic!("Expected MissingColumn error"),
    }
}

#[test]
fn test_load_datalist_without_volume_column() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let csv_path = temp_dir.path().join("paths_only.csv");
    // An inline suffix has to be quoted to stay one CSV field
    std::fs::write(&csv_path, "input_file\n/data/a.nii\n\"/data/b.nii,4\"\n")
        .expect("Failed to write datalist");

    let datalist = load_datalist(&csv_path).expect("Datalist should parse");
    assert_eq!(datalist.len(), 2);
    assert_eq!(datalist.rows[0].user_volume, None);
    assert_eq!(datalist.rows[1].raw_path, "/data/b.nii,4");
}

#[test]
fn test_aggregate_mean() {
    let data = ArrayD::from_shape_vec(
        vec![2, 5],
        vec![0.0, 0.0, 2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
    )
    .expect("Shape matches data");

    let mean_all = ComputeOptions::from_selector("m").unwrap();
    assert_eq!(aggregate(&data, &mean_all), 4.0);

    let mean_nonzero = ComputeOptions::from_selector("M").unwrap();
    assert_eq!(aggregate(&data, &mean_nonzero), 5.0);
}

#[test]
fn test_aggregate_standard_deviation() {
    // Population standard deviation: divide by N, not N-1
    let data = ArrayD::from_shape_vec(
        vec![2, 2, 2],
        vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
    )
    .expect("Shape matches data");

    let sd_all = ComputeOptions::from_selector("s").unwrap();
    assert_eq!(aggregate(&data, &sd_all), 2.0);

    // All entries are positive, so the nonzero restriction changes nothing
    let sd_nonzero = ComputeOptions::from_selector("S").unwrap();
    assert_eq!(aggregate(&data, &sd_nonzero), 2.0);
}

#[test]
fn test_aggregate_empty_selection_is_nan() {
    // An entirely-zero image with omit_zeros selects no voxels; the
    // aggregate is NaN, not an error
    let zeros = ArrayD::from_elem(vec![3, 3, 3], 0.0);

    let mean_nonzero = ComputeOptions::from_selector("M").unwrap();
    assert!(aggregate(&zeros, &mean_nonzero).is_nan());

    let sd_nonzero = ComputeOptions::from_selector("S").unwrap();
    assert!(aggregate(&zeros, &sd_nonzero).is_nan());

    // Without the restriction the zeros are ordinary values
    let mean_all = ComputeOptions::from_selector("m").unwrap();
    assert_eq!(aggregate(&zeros, &mean_all), 0.0);
}

#[test]
fn test_aggregate_nan_propagates() {
    let data =
        ArrayD::from_shape_vec(vec![4], vec![1.0, f64::NAN, 3.0, 5.0]).expect("Shape matches data");

    // NaN voxels poison the all-voxel mean, as numpy would
    let mean_all = ComputeOptions::from_selector("m").unwrap();
    assert!(aggregate(&data, &mean_all).is_nan());

    // NaN is not strictly positive, so the nonzero restriction drops it
    let mean_nonzero = ComputeOptions::from_selector("M").unwrap();
    assert_eq!(aggregate(&data, &mean_nonzero), 3.0);
}

#[test]
fn test_result_table_assembly() {
    let datalist = Datalist {
        headers: vec![
            "input_file".to_string(),
            "volume_0basedindex".to_string(),
            "subject".to_string(),
        ],
        rows: vec![
            InputRow {
                raw_path: "/data/a.nii".to_string(),
                user_volume: Some(0),
                record: vec!["/data/a.nii".into(), "0".into(), "s01".into()],
            },
            InputRow {
                raw_path: "/data/missing.nii".to_string(),
                user_volume: None,
                record: vec!["/data/missing.nii".into(), "".into(), "s02".into()],
            },
        ],
    };

    let results = vec![
        FileStat {
            filename: "/data/a.nii".to_string(),
            outcome: StatOutcome::Computed(1.5),
        },
        FileStat {
            filename: "/data/missing.nii".to_string(),
            outcome: StatOutcome::Skipped {
                reason: "not found".to_string(),
            },
        },
    ];

    let table = ResultTable::assemble(&datalist, &results, "mean of nonzero voxels");

    assert_eq!(
        table.headers,
        vec![
            "input_file",
            "volume_0basedindex",
            "subject",
            "mean of nonzero voxels"
        ]
    );
    assert_eq!(table.rows.len(), 2);

    // Passthrough columns survive verbatim; the stat cell is appended
    assert_eq!(table.rows[0], vec!["/data/a.nii", "0", "s01", "1.5"]);

    // A skipped file keeps its row, with a blank stat cell
    assert_eq!(table.rows[1], vec!["/data/missing.nii", "", "s02", ""]);
}

#[test]
fn test_nan_value_cell_passes_through() {
    let stat = FileStat {
        filename: "zeros.nii".to_string(),
        outcome: StatOutcome::Computed(f64::NAN),
    };
    assert_eq!(stat.value_cell(), "NaN");
}
