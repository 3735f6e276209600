//! Defines core data structures used throughout the application pipeline.
//!
//! Every value here lives for one pipeline run only; nothing is persisted
//! between invocations.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Ordering policy applied to discovered files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
pub enum SortMode {
    /// Keep the order discovery produced.
    #[default]
    #[value(name = "path")]
    #[serde(rename = "path")]
    LexicalPath,
    /// Natural, case-insensitive order of base names.
    #[value(name = "alpha")]
    #[serde(rename = "alpha")]
    AlphabeticalBasename,
    /// Oldest modification time first.
    #[value(name = "mtime")]
    #[serde(rename = "mtime")]
    ModificationTime,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::LexicalPath => "path",
            SortMode::AlphabeticalBasename => "alpha",
            SortMode::ModificationTime => "mtime",
        };
        f.write_str(name)
    }
}

/// Output flavour. Only the default heading template depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Md,
    Plain,
}

impl OutputFormat {
    /// Heading used when no explicit template is configured.
    ///
    /// ```
    /// use tscribe::core_types::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Md.default_heading(), "### {file}");
    /// assert_eq!(OutputFormat::Plain.default_heading(), "// --- {file} ---");
    /// ```
    pub fn default_heading(&self) -> &'static str {
        match self {
            OutputFormat::Md => crate::constants::MD_HEADING_TEMPLATE,
            OutputFormat::Plain => crate::constants::PLAIN_HEADING_TEMPLATE,
        }
    }

    /// File extension used for the archive entry.
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Md => "md",
            OutputFormat::Plain => "txt",
        }
    }
}

/// Inputs to the discovery, filtering and sorting stages.
///
/// `extensions` is already normalized (trimmed, lowercased, no leading dot).
/// An empty list, or a list holding only `*`, matches every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub root_directory: PathBuf,
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub sort_mode: SortMode,
}

impl ScanRequest {
    /// Whether the extension list means "every file".
    ///
    /// ```
    /// use tscribe::core_types::{ScanRequest, SortMode};
    /// use std::path::PathBuf;
    ///
    /// let mut request = ScanRequest {
    ///     root_directory: PathBuf::from("."),
    ///     extensions: vec!["*".to_string()],
    ///     ignore_patterns: vec![],
    ///     sort_mode: SortMode::LexicalPath,
    /// };
    /// assert!(request.matches_all_extensions());
    /// request.extensions = vec!["ts".to_string()];
    /// assert!(!request.matches_all_extensions());
    /// ```
    pub fn matches_all_extensions(&self) -> bool {
        self.extensions.is_empty() || self.extensions.iter().all(|e| e == "*")
    }
}

/// A discovered file, prior to rendering.
///
/// Modification time is only read when the mtime sort asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub absolute_path: PathBuf,
    pub modified_ms: Option<u128>,
}

impl CandidateFile {
    pub fn new(absolute_path: PathBuf) -> Self {
        Self {
            absolute_path,
            modified_ms: None,
        }
    }
}

/// One file's contribution to the output: a heading and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub heading: String,
    pub body: String,
}

impl fmt::Display for RenderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.heading, self.body)
    }
}

/// What a single pipeline run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files rendered (or listed).
    pub files_processed: usize,
    /// Discovery strategy whose result was used.
    pub strategy: Option<&'static str>,
    /// The recursive scan raised and was treated as empty.
    pub degraded: bool,
}
