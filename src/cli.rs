// src/cli.rs

use crate::core_types::{OutputFormat, SortMode};
use clap::Parser;
use std::path::PathBuf;

/// Concatenates source files into one Markdown or plain-text document.
///
/// tscribe finds files by extension under a directory, drops anything matching
/// the ignore globs, orders the rest, and writes each file's content under a
/// heading, to stdout, a file, or a zip archive. The result is ready to paste
/// into an LLM prompt or a review.
///
/// Options left unset fall back to `tscribe.config.toml` or
/// `tscribe.config.json` in the working directory, then to built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root folder to scan [default: .]
    #[arg(short = 's', long = "src", value_name = "DIR")]
    pub src: Option<String>,

    /// Write output to this file instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE", conflicts_with = "zip")]
    pub out: Option<String>,

    /// Write output into a zip archive holding a single entry.
    #[arg(long = "zip", value_name = "FILE")]
    pub zip: Option<String>,

    /// Comma-separated extensions to include; empty or `*` for all files [default: ts,tsx]
    #[arg(short = 'e', long = "ext", value_name = "LIST")]
    pub ext: Option<String>,

    /// Comma-separated ignore globs, relative to the scan root [default: node_modules,dist,.git]
    #[arg(long = "ignore", value_name = "PATTERNS")]
    pub ignore: Option<String>,

    /// Heading template; `{file}` is replaced by the file's path.
    #[arg(long = "heading", value_name = "TEMPLATE")]
    pub heading: Option<String>,

    /// Heading format [default: md]
    #[arg(long = "format", value_enum, value_name = "TYPE")]
    pub format: Option<OutputFormat>,

    /// File order [default: path]
    #[arg(long = "sort", value_enum, value_name = "MODE")]
    pub sort: Option<SortMode>,

    /// Print the file list only, without content.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list: bool,

    /// Re-run whenever a file under the scan root changes.
    #[cfg(feature = "watch")]
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub watch: bool,

    /// Print debug output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Suppress status messages.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,

    /// Executable that rewrites each file: receives the path as its argument
    /// and the content on stdin, prints the new content.
    #[arg(long = "transform", value_name = "PATH")]
    pub transform: Option<String>,

    /// Read options from this config file instead of searching the working directory.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the top-level listing and always walk the tree recursively.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_fast_path: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        let cli = Cli::parse_from(["tscribe"]);
        assert_eq!(cli.src, None);
        assert_eq!(cli.ext, None);
        assert_eq!(cli.sort, None);
        assert!(!cli.list);
        assert!(!cli.no_fast_path);
    }

    #[test]
    fn test_value_enums() {
        let cli = Cli::parse_from(["tscribe", "--sort", "mtime", "--format", "plain"]);
        assert_eq!(cli.sort, Some(SortMode::ModificationTime));
        assert_eq!(cli.format, Some(OutputFormat::Plain));
        assert!(Cli::try_parse_from(["tscribe", "--sort", "size"]).is_err());
    }

    #[test]
    fn test_out_conflicts_with_zip() {
        let result = Cli::try_parse_from(["tscribe", "-o", "a.md", "--zip", "a.zip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_ext_is_accepted() {
        let cli = Cli::parse_from(["tscribe", "--ext", ""]);
        assert_eq!(cli.ext.as_deref(), Some(""));
    }
}
