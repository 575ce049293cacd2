//! Volume selection for possibly-4D NIfTI files
//!
//! A datalist row can name its volume in two ways: an explicit
//! `volume_0basedindex` column, and SPM-style inline syntax where `,N`
//! after the file name denotes a 1-based volume. This module strips the
//! inline syntax and resolves the two sources into a single 0-based index
//! per row.
//!
//! Preference order: explicit volume col > SPM syntax > default to first vol.

use crate::datalist::InputRow;
use std::collections::HashMap;
use std::path::Path;

/// Reserved separator for the inline volume syntax
pub const VOLUME_SEPARATOR: char = ',';

/// A row resolved to a concrete file and volume
///
/// `volume_index` is always defined after resolution; resolution never
/// fails, it only falls back to the first volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Path with any inline volume suffix stripped
    pub clean_path: String,
    /// 0-based volume to read
    pub volume_index: usize,
    /// Whether `clean_path` named a file at resolution time
    pub exists: bool,
}

/// Splits SPM-style inline syntax off a path, returning the clean path and
/// the 0-based volume, if any
///
/// The inline suffix is 1-based, so `"f.nii,3"` resolves to volume index 2.
/// A malformed suffix (non-numeric, or `0`, which has no 0-based
/// counterpart) is treated as absent and the raw string is returned
/// untouched, so a path that merely contains a comma is not mangled.
#[must_use]
pub fn split_volume_suffix(raw: &str) -> (&str, Option<usize>) {
    match raw.split_once(VOLUME_SEPARATOR) {
        Some((path, suffix)) => match suffix.trim().parse::<usize>() {
            Ok(vol) if vol >= 1 => (path, Some(vol - 1)),
            _ => (raw, None),
        },
        None => (raw, None),
    }
}

/// Appends the SPM-style suffix for a 0-based volume index to a path
///
/// Inverse of [`split_volume_suffix`]:
/// `split_volume_suffix(&join_volume_suffix(p, n)) == (p, Some(n))`.
#[must_use]
pub fn join_volume_suffix(path: &str, volume_index: usize) -> String {
    format!("{path}{VOLUME_SEPARATOR}{}", volume_index + 1)
}

/// Resolves every row of a datalist to a concrete file and volume
///
/// Per row, the volume is chosen with the preference order above; a row
/// with neither source defaults to volume 0. The filesystem existence
/// check runs once per distinct path across the whole batch, so duplicate
/// paths cost a single lookup. Running this twice over the same input
/// produces identical output.
#[must_use]
pub fn resolve_targets(rows: &[InputRow]) -> Vec<ResolvedTarget> {
    let mut exists_cache: HashMap<&str, bool> = HashMap::new();

    rows.iter()
        .map(|row| {
            let (clean_path, suffix_volume) = split_volume_suffix(&row.raw_path);

            let volume_index = match (row.user_volume, suffix_volume) {
                // Matching sources agree, conflicts defer to the explicit column
                (Some(user), _) => user,
                (None, Some(suffix)) => suffix,
                (None, None) => 0,
            };

            let exists = *exists_cache
                .entry(clean_path)
                .or_insert_with(|| Path::new(clean_path).exists());

            ResolvedTarget {
                clean_path: clean_path.to_string(),
                volume_index,
                exists,
            }
        })
        .collect()
}
