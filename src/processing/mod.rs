//! Handles the read stage of rendering.
//!
//! Each sorted file is read in full and, when a transform is configured,
//! rewritten by it. Reads run in parallel with Rayon but results are collected
//! positionally, so the output order is always the sorter's order.

use crate::core_types::CandidateFile;
use crate::diagnostics::Diagnostics;
use crate::errors::{io_error_with_path, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

pub mod transform;

use transform::ContentTransform;

/// Reads a file's full text content.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing, so binary files
/// picked up by a match-everything extension list still render.
pub fn read_file_content(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads every file and applies `transform` when present.
///
/// Returns the bodies in the same order as `files`. The first read or
/// transform failure aborts the whole stage.
pub fn load_bodies(
    files: &[CandidateFile],
    transform: Option<&dyn ContentTransform>,
    diag: Diagnostics,
) -> Result<Vec<String>> {
    files
        .par_iter()
        .map(|file| {
            let path = &file.absolute_path;
            let content = read_file_content(path)?;
            match transform {
                Some(t) => {
                    let rewritten = t.apply(&content, path)?;
                    diag.debug(format!(
                        "Applied transform '{}' to {}",
                        t.name(),
                        path.display()
                    ));
                    Ok(rewritten)
                }
                None => Ok(content),
            }
        })
        .collect()
}
