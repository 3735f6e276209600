// src/discovery/walker.rs

use super::pattern::build_pattern_for;
use super::DiscoveryStrategy;
use crate::core_types::ScanRequest;
use crate::diagnostics::Diagnostics;
use crate::errors::{Error, Result};
use crate::filtering::IgnoreMatcher;
use crate::paths::to_slash;
use crossbeam_channel::unbounded;
use globset::{GlobBuilder, GlobMatcher};
use ignore::{WalkBuilder, WalkState};
use std::path::PathBuf;

/// Walks the whole tree under the scan root and keeps files matching the
/// pattern produced by [`build_pattern_for`]. Ignore globs prune directories
/// at walk time.
///
/// Results are sorted by path so the "path" order is reproducible even
/// though the walk runs on several threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveGlob;

impl RecursiveGlob {
    /// Compiles the match pattern. This is the point where the matcher can fail.
    fn compile(pattern: &str) -> Result<GlobMatcher> {
        GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(true)
            .build()
            .map(|glob| glob.compile_matcher())
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Configures the `ignore::WalkBuilder`. `.gitignore` and hidden-file rules
    /// are off: only the tool's own ignore list applies.
    fn build_walker(request: &ScanRequest, diag: Diagnostics) -> ignore::WalkParallel {
        let mut builder = WalkBuilder::new(&request.root_directory);
        builder
            .standard_filters(false)
            .follow_links(false)
            .require_git(false);

        let matcher = IgnoreMatcher::new(&request.ignore_patterns, diag);
        if !matcher.is_empty() {
            let root = request.root_directory.clone();
            builder.filter_entry(move |entry| {
                // The root itself is never pruned.
                if entry.depth() == 0 {
                    return true;
                }
                !matcher.is_ignored_under(entry.path(), &root)
            });
            diag.debug(format!(
                "Walker prunes entries matching {} ignore pattern(s)",
                request.ignore_patterns.len()
            ));
        }

        builder.build_parallel()
    }
}

impl DiscoveryStrategy for RecursiveGlob {
    fn name(&self) -> &'static str {
        "recursive glob"
    }

    fn discover(&self, request: &ScanRequest, diag: Diagnostics) -> Result<Vec<PathBuf>> {
        let root = to_slash(&request.root_directory);
        let pattern = build_pattern_for(&root, &request.extensions);
        diag.debug(format!("Recursive match pattern: {}", pattern));
        let matcher = Self::compile(&pattern)?;

        let walker = Self::build_walker(request, diag);
        let (tx, rx) = unbounded();

        walker.run(|| {
            let tx = tx.clone();
            let matcher = matcher.clone();
            Box::new(move |entry_result| {
                let entry = match entry_result {
                    Ok(entry) => entry,
                    Err(e) => {
                        diag.warn(format!("Walker error: {}", e));
                        return WalkState::Continue;
                    }
                };
                let is_file = entry.file_type().map_or(false, |ft| ft.is_file());
                if is_file && matcher.is_match(to_slash(entry.path())) {
                    if tx.send(entry.into_path()).is_err() {
                        return WalkState::Quit;
                    }
                }
                WalkState::Continue
            })
        });
        drop(tx);

        let mut found: Vec<PathBuf> = rx.into_iter().collect();
        found.sort();
        diag.debug(format!("Recursive glob found {} file(s)", found.len()));
        Ok(found)
    }
}
