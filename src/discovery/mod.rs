//! Discovers candidate files under the scan root.
//!
//! Discovery is an explicit two-step chain: a fast, non-recursive
//! [`DirectListing`] of the root, then a [`RecursiveGlob`] walk that only runs
//! when the fast path came back empty. A strategy that raises is logged and
//! counted as zero results; the chain never aborts the pipeline.

use crate::core_types::{CandidateFile, ScanRequest};
use crate::diagnostics::Diagnostics;
use crate::errors::Result;
use std::path::PathBuf;
use tracing::instrument;

mod direct;
pub mod pattern;
mod walker;

pub use direct::DirectListing;
pub use walker::RecursiveGlob;

/// An algorithm that turns a scan request into a set of absolute file paths.
pub trait DiscoveryStrategy: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;
    /// Returns matching files under `request.root_directory`.
    fn discover(&self, request: &ScanRequest, diag: Diagnostics) -> Result<Vec<PathBuf>>;
}

/// Outcome of a discovery run.
///
/// `degraded` separates "nothing matched" from "the strategy whose result was
/// used raised and was swallowed": both leave `files` empty, only the latter
/// sets the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub files: Vec<CandidateFile>,
    /// Name of the last strategy consulted, `None` if none ran (missing root).
    pub strategy: Option<&'static str>,
    pub degraded: bool,
}

/// Ordered strategies, each consulted only if every earlier one produced no
/// paths.
pub struct StrategyChain {
    strategies: Vec<Box<dyn DiscoveryStrategy>>,
}

impl StrategyChain {
    /// A chain with a primary strategy and one fallback.
    pub fn new(primary: Box<dyn DiscoveryStrategy>, fallback: Box<dyn DiscoveryStrategy>) -> Self {
        Self {
            strategies: vec![primary, fallback],
        }
    }

    /// A chain holding a single strategy, no fallback.
    pub fn single(strategy: Box<dyn DiscoveryStrategy>) -> Self {
        Self {
            strategies: vec![strategy],
        }
    }

    /// Direct listing first, recursive glob when it finds nothing.
    pub fn standard() -> Self {
        Self::new(Box::new(DirectListing), Box::new(RecursiveGlob))
    }

    /// Only the recursive glob.
    pub fn recursive_only() -> Self {
        Self::single(Box::new(RecursiveGlob))
    }

    /// Runs the chain. Falls through to the next strategy iff the current
    /// one returned zero paths (an error counts as zero).
    pub fn run(&self, request: &ScanRequest, diag: Diagnostics) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for strategy in &self.strategies {
            report.strategy = Some(strategy.name());
            match strategy.discover(request, diag) {
                Ok(paths) if !paths.is_empty() => {
                    diag.debug(format!(
                        "Strategy '{}' produced {} file(s)",
                        strategy.name(),
                        paths.len()
                    ));
                    report.files = paths.into_iter().map(CandidateFile::new).collect();
                    report.degraded = false;
                    return report;
                }
                Ok(_) => {
                    report.degraded = false;
                    diag.debug(format!("Strategy '{}' found no files", strategy.name()));
                }
                Err(e) => {
                    report.degraded = true;
                    diag.warn(format!(
                        "Discovery strategy '{}' failed, treating as zero results: {}",
                        strategy.name(),
                        e
                    ));
                }
            }
        }

        report
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Discovers files for `request` using `chain`.
///
/// A scan root that does not exist (or is not a directory) is a normal
/// outcome: the report is empty and no strategy runs.
///
/// # Examples
///
/// ```
/// use tscribe::core_types::{ScanRequest, SortMode};
/// use tscribe::diagnostics::Diagnostics;
/// use tscribe::discovery::{discover_files, StrategyChain};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::create_dir(temp.path().join("src")).unwrap();
/// fs::write(temp.path().join("src/index.ts"), "export {}").unwrap();
///
/// let request = ScanRequest {
///     root_directory: temp.path().to_path_buf(),
///     extensions: vec!["ts".to_string()],
///     ignore_patterns: vec![],
///     sort_mode: SortMode::LexicalPath,
/// };
/// // The top level holds no .ts file, so the recursive fallback finds it.
/// let report = discover_files(&request, &StrategyChain::standard(), Diagnostics::silent());
/// assert_eq!(report.files.len(), 1);
/// assert_eq!(report.strategy, Some("recursive glob"));
/// assert!(!report.degraded);
/// ```
#[instrument(level = "debug", skip_all, fields(root = %request.root_directory.display()))]
pub fn discover_files(
    request: &ScanRequest,
    chain: &StrategyChain,
    diag: Diagnostics,
) -> DiscoveryReport {
    if !request.root_directory.is_dir() {
        diag.info(format!(
            "Source directory '{}' does not exist; nothing to do.",
            request.root_directory.display()
        ));
        return DiscoveryReport::default();
    }

    let report = chain.run(request, diag);
    diag.debug(format!(
        "Found {} file(s) before filtering (strategy: {})",
        report.files.len(),
        report.strategy.unwrap_or("none")
    ));
    report
}
