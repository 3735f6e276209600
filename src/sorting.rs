// src/sorting.rs

//! Orders candidate files according to a [`SortMode`].

use crate::core_types::{CandidateFile, SortMode};
use crate::diagnostics::Diagnostics;
use crate::errors::{io_error_with_path, Result};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Sorts `files` by `mode`.
///
/// - `LexicalPath` returns the input untouched.
/// - `AlphabeticalBasename` uses natural, case-insensitive ordering of base
///   names; ties fall back to case-sensitive order, then the full path.
/// - `ModificationTime` stats every file (in parallel) and sorts oldest
///   first. The sort is stable, so equal timestamps keep their input order.
///   A file that cannot be stat-ed fails the whole sort.
///
/// # Examples
///
/// ```
/// use tscribe::core_types::{CandidateFile, SortMode};
/// use tscribe::diagnostics::Diagnostics;
/// use tscribe::sorting::sort_files;
///
/// let files: Vec<CandidateFile> = ["z.ts", "a.ts", "m.ts"]
///     .iter()
///     .map(|p| CandidateFile::new(p.into()))
///     .collect();
///
/// let sorted = sort_files(files, SortMode::AlphabeticalBasename, Diagnostics::silent()).unwrap();
/// let names: Vec<_> = sorted.iter().map(|f| f.absolute_path.to_str().unwrap()).collect();
/// assert_eq!(names, vec!["a.ts", "m.ts", "z.ts"]);
/// ```
pub fn sort_files(
    mut files: Vec<CandidateFile>,
    mode: SortMode,
    diag: Diagnostics,
) -> Result<Vec<CandidateFile>> {
    diag.debug(format!("Sorting {} file(s) by {}", files.len(), mode));
    match mode {
        SortMode::LexicalPath => Ok(files),
        SortMode::AlphabeticalBasename => {
            files.sort_by(|a, b| compare_basenames(&a.absolute_path, &b.absolute_path));
            Ok(files)
        }
        SortMode::ModificationTime => {
            let mut stamped = stamp_modification_times(files)?;
            stamped.sort_by_key(|f| f.modified_ms);
            Ok(stamped)
        }
    }
}

/// Natural base name comparison with deterministic tie-breaks.
pub fn compare_basenames(a: &Path, b: &Path) -> Ordering {
    let name_a = basename(a);
    let name_b = basename(b);
    natord::compare_ignore_case(&name_a, &name_b)
        .then_with(|| natord::compare(&name_a, &name_b))
        .then_with(|| natord::compare(&a.to_string_lossy(), &b.to_string_lossy()))
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Fills `modified_ms` for every file. Output keeps input positions.
fn stamp_modification_times(files: Vec<CandidateFile>) -> Result<Vec<CandidateFile>> {
    files
        .into_par_iter()
        .map(|mut file| {
            file.modified_ms = Some(modified_millis(&file.absolute_path)?);
            Ok(file)
        })
        .collect()
}

/// Last-modified time in milliseconds since the Unix epoch.
fn modified_millis(path: &Path) -> Result<u128> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| io_error_with_path(e, path))?;
    // Timestamps before the epoch clamp to zero.
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0))
}
