//! Defines the `Config` struct and related types for a pipeline run.
//!
//! Settings come from three layers (CLI flags, an optional config file, and
//! built-in defaults) and are merged by [`ConfigBuilder`] into one validated
//! [`Config`] that the rest of the crate consumes.

use crate::core_types::{OutputFormat, ScanRequest};
use crate::diagnostics::Diagnostics;
use crate::processing::transform::ContentTransform;
use std::path::PathBuf;
use std::sync::Arc;

pub use builder::ConfigBuilder;
pub use file::{FileConfig, ListValue};

mod builder;
mod file;
mod parsing;

/// A fully resolved, validated configuration for one or more pipeline runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// What to scan and how to order it.
    pub request: ScanRequest,
    /// Heading template; `{file}` is replaced by the display path.
    pub heading_template: String,
    pub format: OutputFormat,
    /// Emit the sorted path list instead of rendered content.
    pub list_only: bool,
    pub destination: OutputDestination,
    /// Resolved once at build time; never reloaded between watch runs.
    pub transform: Option<Arc<dyn ContentTransform>>,
    pub diagnostics: Diagnostics,
    pub watch: bool,
    /// Try the non-recursive listing before the recursive walk.
    pub fast_path: bool,
    /// Base for display paths in headings.
    pub working_directory: PathBuf,
}

impl Config {
    /// Creates a default `Config` rooted at `root`, for tests and doc tests.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            request: ScanRequest {
                root_directory: root.clone(),
                extensions: vec!["ts".to_string(), "tsx".to_string()],
                ignore_patterns: vec![
                    "node_modules".to_string(),
                    "dist".to_string(),
                    ".git".to_string(),
                ],
                sort_mode: Default::default(),
            },
            heading_template: OutputFormat::Md.default_heading().to_string(),
            format: OutputFormat::Md,
            list_only: false,
            destination: OutputDestination::Stdout,
            transform: None,
            diagnostics: Diagnostics::silent(),
            watch: false,
            fast_path: true,
            working_directory: root,
        }
    }
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Overwrite the specified file.
    File(PathBuf),
    /// Write a zip archive holding a single entry.
    Archive(PathBuf),
}

impl OutputDestination {
    /// The file this destination writes to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            OutputDestination::Stdout => None,
            OutputDestination::File(p) | OutputDestination::Archive(p) => Some(p),
        }
    }
}
