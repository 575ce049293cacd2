//! Centralized error handling for batch_niistats
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! used throughout the codebase, enabling better error context and type safety.

use std::fmt;

/// Main error type for batch_niistats operations
#[derive(Debug)]
pub enum BatchNiiError {
    /// NIfTI file operation errors
    NiftiError(nifti::NiftiError),

    /// Datalist CSV reading/writing errors
    CsvError(csv::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Required column missing from the datalist
    MissingColumn { column: String },

    /// Unrecognized statistic selector
    InvalidSelector { selector: String },

    /// Volume index beyond the file's trailing axis
    VolumeOutOfRange {
        file: String,
        volume: usize,
        volumes: usize,
    },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for BatchNiiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchNiiError::NiftiError(e) => write!(f, "NIfTI error: {}", e),
            BatchNiiError::CsvError(e) => write!(f, "CSV error: {}", e),
            BatchNiiError::IoError(e) => write!(f, "I/O error: {}", e),
            BatchNiiError::MissingColumn { column } => {
                write!(f, "Column '{}' not found in datalist", column)
            }
            BatchNiiError::InvalidSelector { selector } => write!(
                f,
                "Unrecognized statistic option '{}': expected M, m, S, or s",
                selector
            ),
            BatchNiiError::VolumeOutOfRange {
                file,
                volume,
                volumes,
            } => write!(
                f,
                "Volume {} out of range for '{}' ({} volumes available)",
                volume, file, volumes
            ),
            BatchNiiError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            BatchNiiError::ArrayError(e) => write!(f, "Array error: {}", e),
            BatchNiiError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BatchNiiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchNiiError::NiftiError(e) => Some(e),
            BatchNiiError::CsvError(e) => Some(e),
            BatchNiiError::IoError(e) => Some(e),
            BatchNiiError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<nifti::NiftiError> for BatchNiiError {
    fn from(error: nifti::NiftiError) -> Self {
        BatchNiiError::NiftiError(error)
    }
}

impl From<csv::Error> for BatchNiiError {
    fn from(error: csv::Error) -> Self {
        BatchNiiError::CsvError(error)
    }
}

impl From<std::io::Error> for BatchNiiError {
    fn from(error: std::io::Error) -> Self {
        BatchNiiError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for BatchNiiError {
    fn from(error: ndarray::ShapeError) -> Self {
        BatchNiiError::ArrayError(error)
    }
}

impl From<String> for BatchNiiError {
    fn from(error: String) -> Self {
        BatchNiiError::Generic(error)
    }
}

impl From<&str> for BatchNiiError {
    fn from(error: &str) -> Self {
        BatchNiiError::Generic(error.to_string())
    }
}

/// Result type alias for batch_niistats operations
pub type Result<T> = std::result::Result<T, BatchNiiError>;
