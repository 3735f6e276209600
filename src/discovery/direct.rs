// src/discovery/direct.rs

use super::DiscoveryStrategy;
use crate::core_types::ScanRequest;
use crate::diagnostics::Diagnostics;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::matches_extension;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Lists only the immediate children of the scan root and keeps files whose
/// name matches the extension list. Not recursive.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectListing;

impl DiscoveryStrategy for DirectListing {
    fn name(&self) -> &'static str {
        "direct listing"
    }

    fn discover(&self, request: &ScanRequest, diag: Diagnostics) -> Result<Vec<PathBuf>> {
        let root = &request.root_directory;
        let mut found = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    // The root itself could not be listed.
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory loop"));
                    return Err(io_error_with_path(source, root));
                }
                Err(e) => {
                    diag.warn(format!("Skipping unreadable entry: {}", e));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if matches_extension(entry.path(), &request.extensions) {
                found.push(entry.into_path());
            }
        }

        diag.debug(format!(
            "Direct listing of {} found {} file(s)",
            root.display(),
            found.len()
        ));
        Ok(found)
    }
}
