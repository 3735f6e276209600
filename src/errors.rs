//! Defines the error types used by the `tscribe` pipeline.
//!
//! Non-fatal conditions (missing scan root, zero matches, a recursive scan that
//! raised) never surface here: they degrade to an empty result and a diagnostic.
//! Everything in [`Error`] aborts the current run.

use std::path::Path;
use thiserror::Error;

/// A specialized `Result` type for `tscribe` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while validating options or loading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },

    /// Two options that cannot be combined were both set.
    #[error("Cannot use {option1} and {option2} simultaneously.")]
    Conflict { option1: String, option2: String },

    /// A config file exists but could not be read or parsed.
    #[error("Failed to load config file '{path}': {reason}")]
    ConfigFile { path: String, reason: String },
}

/// The main error type for the `tscribe` library.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading, stat-ing or writing a path failed.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured transform could not be resolved at startup.
    #[error("Failed to load transform '{path}': {reason}")]
    TransformLoad { path: String, reason: String },

    /// A loaded transform failed while rewriting a file.
    #[error("Transform failed for '{path}': {reason}")]
    Transform { path: String, reason: String },

    /// A glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The zip archive could not be written or finalized.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[cfg(feature = "watch")]
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[cfg(feature = "watch")]
    #[error("Failed to set Ctrl+C signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// The run was cancelled (Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

impl Error {
    /// Whether this error should be reported as a startup failure rather than a
    /// runtime failure. Startup failures exit with status 2.
    pub fn is_startup_failure(&self) -> bool {
        matches!(
            self,
            Error::TransformLoad { .. } | Error::Config(ConfigError::ConfigFile { .. })
        )
    }
}

/// Wraps an `std::io::Error` with the path it happened on.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.ts");
        let source = io::Error::new(io::ErrorKind::NotFound, "File not found");
        match io_error_with_path(source, &path) {
            Error::Io { path, source } => {
                assert!(path.contains("some/test/path.ts"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Error::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_startup_failure_classification() {
        let load = Error::TransformLoad {
            path: "x".into(),
            reason: "missing".into(),
        };
        assert!(load.is_startup_failure());

        let file = Error::from(ConfigError::ConfigFile {
            path: "tscribe.config.toml".into(),
            reason: "bad".into(),
        });
        assert!(file.is_startup_failure());

        let run = Error::Transform {
            path: "a.ts".into(),
            reason: "exit 1".into(),
        };
        assert!(!run.is_startup_failure());
        assert!(!Error::Interrupted.is_startup_failure());
    }

    #[test]
    fn test_conflict_message() {
        let err = Error::from(ConfigError::Conflict {
            option1: "--out".into(),
            option2: "--zip".into(),
        });
        assert_eq!(
            err.to_string(),
            "Cannot use --out and --zip simultaneously."
        );
    }
}
