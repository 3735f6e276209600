// src/filtering/ignore_filter.rs

//! Re-applies the ignore globs to discovered candidates.
//!
//! Discovery strategies may or may not honor the ignore list themselves. This
//! pass runs regardless, so the surviving set is the same whichever strategy
//! produced it.

use crate::core_types::CandidateFile;
use crate::diagnostics::Diagnostics;
use crate::paths::to_slash;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Splits a raw comma-separated ignore specifier into patterns.
///
/// `None` and blank input yield an empty list.
///
/// ```
/// use tscribe::filtering::parse_ignore_list;
///
/// assert_eq!(parse_ignore_list(Some("dist, node_modules/** ,")), vec!["dist", "node_modules/**"]);
/// assert!(parse_ignore_list(Some("  ")).is_empty());
/// assert!(parse_ignore_list(None).is_empty());
/// ```
pub fn parse_ignore_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Compiled ignore globs, matched against paths relative to the scan root.
///
/// A trailing `/` is dropped. Patterns starting with `./` or `/`, or holding a
/// `/` inside, are anchored at the root; bare names match at any depth. A path
/// is ignored when it, or any of its ancestor directories, matches.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
    len: usize,
}

impl IgnoreMatcher {
    /// Compiles the patterns. Invalid ones are reported and skipped.
    pub fn new(patterns: &[String], diag: Diagnostics) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut len = 0;
        for pattern in patterns {
            let rooted = pattern.starts_with("./") || pattern.starts_with('/');
            let trimmed = pattern
                .trim_start_matches("./")
                .trim_start_matches('/')
                .trim_end_matches('/');
            if trimmed.is_empty() {
                continue;
            }
            let anchored = if rooted || trimmed.contains('/') {
                trimmed.to_string()
            } else {
                format!("**/{}", trimmed)
            };
            match GlobBuilder::new(&anchored).literal_separator(true).build() {
                Ok(glob) => {
                    diag.debug(format!("Compiled ignore glob '{}' as '{}'", pattern, anchored));
                    builder.add(glob);
                    len += 1;
                }
                Err(e) => diag.warn(format!("Invalid ignore pattern '{}': {}", pattern, e)),
            }
        }
        let set = builder.build().unwrap_or_else(|e| {
            diag.warn(format!("Failed to build ignore set: {}", e));
            GlobSet::empty()
        });
        Self { set, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a root-relative path (or one of its parents) is ignored.
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        relative_path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .any(|p| self.set.is_match(to_slash(p)))
    }

    /// Matches an absolute path by first making it relative to `root`.
    /// Paths outside `root` are matched as given.
    pub fn is_ignored_under(&self, path: &Path, root: &Path) -> bool {
        match path.strip_prefix(root) {
            Ok(relative) => self.is_ignored(relative),
            Err(_) => self.is_ignored(path),
        }
    }
}

/// Drops every candidate whose root-relative path matches an ignore pattern.
///
/// An empty pattern list is a no-op.
pub fn apply_ignore_filter(
    files: Vec<CandidateFile>,
    patterns: &[String],
    root: &Path,
    diag: Diagnostics,
) -> Vec<CandidateFile> {
    if patterns.is_empty() {
        return files;
    }
    let matcher = IgnoreMatcher::new(patterns, diag);
    let before = files.len();
    let kept: Vec<CandidateFile> = files
        .into_iter()
        .filter(|file| {
            let ignored = matcher.is_ignored_under(&file.absolute_path, root);
            if ignored {
                diag.debug(format!("Ignoring {}", to_slash(&file.absolute_path)));
            }
            !ignored
        })
        .collect();
    diag.debug(format!(
        "Ignore filter kept {} of {} file(s)",
        kept.len(),
        before
    ));
    kept
}
